use std::io::{self, BufRead, Write};

use dispatch_engine::dispatch::{
    directory::DispatchDirectory,
    patient::Severity,
    report::{CloseReport, OpenReport, TreatReport},
    topology::{reference_network, Road},
};

fn main() {
    env_logger::init();

    // An alternative topology can be passed as a JSON road list.
    let roads = match std::env::args().nth(1) {
        Some(path) => load_topology(&path),
        None => reference_network(),
    };

    let mut directory = DispatchDirectory::new(&roads);
    println!("Dispatch network initialized with {} cities.", directory.city_count());
    println!("Type 'help' for available commands.\n");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().unwrap();

        let mut input = String::new();
        if stdin.lock().read_line(&mut input).unwrap() == 0 {
            break;
        }
        let input = input.trim();
        if input.is_empty() {
            continue;
        }
        if !process_command(&mut directory, input) {
            break;
        }
    }

    println!("Goodbye.");
}

fn load_topology(path: &str) -> Vec<Road> {
    let data = std::fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read {}: {}", path, err));
    serde_json::from_str(&data)
        .unwrap_or_else(|err| panic!("failed to parse {}: {}", path, err))
}

/// Execute one command line. Returns false when the driver should quit.
fn process_command(directory: &mut DispatchDirectory, input: &str) -> bool {
    let (command, rest) = split_word(input);
    match command {
        "quit" | "exit" => return false,
        "emergency" => handle_emergency(directory, rest),
        "hospital" => {
            let (action, city) = split_word(rest);
            match action {
                "close" => handle_close(directory, city),
                "open" => handle_open(directory, city),
                other => println!("Unknown hospital action: {}", other),
            }
        }
        "treat" => handle_treat(directory, rest),
        "status" => print_status(directory),
        "help" => print_help(),
        other => {
            println!("Unknown command: {}", other);
            println!("Type 'help' for available commands.");
        }
    }
    true
}

fn handle_emergency(directory: &mut DispatchDirectory, args: &str) {
    let (name, rest) = match take_name(args) {
        Some(parsed) => parsed,
        None => {
            println!("Usage: emergency \"<name>\" <severity> <city>");
            return;
        }
    };
    let (severity_word, city) = split_word(rest);

    let severity = match severity_word.parse::<u8>().ok().map(Severity::new) {
        Some(Ok(severity)) => severity,
        _ => {
            println!(
                "Error: Severity must be between {} and {}.",
                Severity::MIN,
                Severity::MAX
            );
            return;
        }
    };
    if city.is_empty() {
        println!("Usage: emergency \"<name>\" <severity> <city>");
        return;
    }

    match directory.route_emergency(name, severity, city) {
        Ok(admission) => println!(
            "Patient {} (severity {}) from {} admitted to {} hospital.",
            name, severity, city, admission.facility
        ),
        Err(err) => println!("Error: {}", err),
    }
}

fn handle_close(directory: &mut DispatchDirectory, city: &str) {
    match directory.close_facility(city) {
        Ok(CloseReport::AlreadyClosed) => {
            println!("{} hospital is already closed.", city);
        }
        Ok(CloseReport::Closed) => {
            println!("{} hospital closed.", city);
        }
        Ok(CloseReport::Transferred { count, destination }) => {
            println!(
                "{} hospital closed. {} patients transferred to {} hospital.",
                city, count, destination
            );
        }
        Ok(CloseReport::Stranded { count }) => {
            println!(
                "{} hospital closed. Warning: no open hospital available to transfer {} patients.",
                city, count
            );
        }
        Err(err) => println!("Error: {}", err),
    }
}

fn handle_open(directory: &mut DispatchDirectory, city: &str) {
    match directory.open_facility(city) {
        Ok(OpenReport::AlreadyOpen) => println!("{} hospital is already open.", city),
        Ok(OpenReport::Opened) => println!("{} hospital is now open.", city),
        Err(err) => println!("Error: {}", err),
    }
}

fn handle_treat(directory: &mut DispatchDirectory, city: &str) {
    match directory.treat_next(city) {
        Ok(TreatReport::NoPatients) => {
            println!("No patients waiting at {} hospital.", city);
        }
        Ok(TreatReport::Treated(patient)) => {
            println!(
                "Treating {} (severity {}) originally from {} at {} hospital.",
                patient.name, patient.severity, patient.origin, city
            );
        }
        Err(err) => println!("Error: {}", err),
    }
}

fn print_status(directory: &DispatchDirectory) {
    println!("\n=== Hospital Network Status ===");
    for status in directory.status() {
        println!("\nHospital: {}", status.city);
        println!("Status: {}", if status.is_open { "OPEN" } else { "CLOSED" });
        println!("Patients Waiting: {}", status.patients_waiting);
        if let Some(patient) = status.next_patient {
            println!(
                "Next Patient: {}, Severity: {}, From: {}",
                patient.name, patient.severity, patient.origin
            );
        }
    }
    println!("\n==============================\n");
}

fn print_help() {
    println!("\nAvailable commands:");
    println!("  emergency \"<name>\" <severity> <city> - Register new emergency");
    println!("  hospital close <city>                 - Close a hospital");
    println!("  hospital open <city>                  - Reopen a hospital");
    println!("  treat <city>                          - Treat next patient");
    println!("  status                                - Show all hospital status");
    println!("  help                                  - Show this help message");
    println!("  quit/exit                             - Exit the program");
    println!();
}

/// Split off the first whitespace-delimited word.
fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.find(char::is_whitespace) {
        Some(position) => (&input[..position], input[position..].trim_start()),
        None => (input, ""),
    }
}

/// Take a patient name, quoted or bare, returning it with the remainder.
fn take_name(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start();
    if let Some(rest) = input.strip_prefix('"') {
        let end = rest.find('"')?;
        Some((&rest[..end], rest[end + 1..].trim_start()))
    } else if input.is_empty() {
        None
    } else {
        Some(split_word(input))
    }
}
