use crate::core::container::heap::PriorityHeap;
use crate::core::graph::road_network::CityId;
use crate::dispatch::patient::Patient;

/// A hospital bound 1:1 to a city.
///
/// Holds the severity-ordered patient queue and the open/closed flag.
/// The facility itself does not reject admissions while closed: routing
/// never targets a closed facility, and that policy belongs to the
/// [`DispatchDirectory`](crate::dispatch::directory::DispatchDirectory).
#[derive(Debug, Clone)]
pub struct Facility {
    city: CityId,
    is_open: bool,
    queue: PriorityHeap<Patient>,
}

impl Facility {
    /// Create an open facility for a city.
    pub fn new(city: CityId) -> Self {
        Self {
            city,
            is_open: true,
            queue: PriorityHeap::new(),
        }
    }

    pub fn city(&self) -> CityId {
        self.city
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Open the facility. Returns false if it was already open.
    pub fn open(&mut self) -> bool {
        let changed = !self.is_open;
        self.is_open = true;
        changed
    }

    /// Close the facility. Returns false if it was already closed.
    pub fn close(&mut self) -> bool {
        let changed = self.is_open;
        self.is_open = false;
        changed
    }

    pub fn admit(&mut self, patient: Patient) {
        self.queue.insert(patient);
    }

    /// Remove and return the most urgent patient.
    pub fn treat(&mut self) -> Option<Patient> {
        self.queue.extract_max()
    }

    pub fn has_patients(&self) -> bool {
        !self.queue.is_empty()
    }

    pub fn patient_count(&self) -> usize {
        self.queue.len()
    }

    pub fn next_patient(&self) -> Option<&Patient> {
        self.queue.peek_max()
    }

    /// Move the entire queue of `other` into this facility.
    pub fn absorb(&mut self, other: &mut Facility) {
        self.queue.merge(&mut other.queue);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::patient::Severity;

    fn patient(name: &str, severity: u8) -> Patient {
        Patient::new(name, Severity::new(severity).unwrap(), "Pullman")
    }

    #[test]
    fn test_facility_starts_open_and_empty() {
        let facility = Facility::new(CityId::new(0));
        assert!(facility.is_open());
        assert!(!facility.has_patients());
        assert_eq!(facility.patient_count(), 0);
    }

    #[test]
    fn test_open_close_report_changes() {
        let mut facility = Facility::new(CityId::new(0));
        assert!(facility.close());
        assert!(!facility.close());
        assert!(facility.open());
        assert!(!facility.open());
    }

    #[test]
    fn test_treat_follows_severity_order() {
        let mut facility = Facility::new(CityId::new(0));
        facility.admit(patient("Alice", 4));
        facility.admit(patient("Bob", 9));
        facility.admit(patient("Carol", 6));

        assert_eq!(facility.next_patient().map(|p| p.name.as_str()), Some("Bob"));
        assert_eq!(facility.treat().map(|p| p.name), Some("Bob".to_string()));
        assert_eq!(facility.treat().map(|p| p.name), Some("Carol".to_string()));
        assert_eq!(facility.treat().map(|p| p.name), Some("Alice".to_string()));
        assert_eq!(facility.treat(), None);
    }

    #[test]
    fn test_absorb_drains_other_facility() {
        let mut destination = Facility::new(CityId::new(0));
        destination.admit(patient("Alice", 3));

        let mut source = Facility::new(CityId::new(1));
        source.admit(patient("Bob", 8));
        source.admit(patient("Carol", 5));

        destination.absorb(&mut source);

        assert_eq!(destination.patient_count(), 3);
        assert_eq!(source.patient_count(), 0);
        assert_eq!(destination.treat().map(|p| p.name), Some("Bob".to_string()));
    }

    #[test]
    fn test_closed_facility_retains_queue() {
        let mut facility = Facility::new(CityId::new(0));
        facility.admit(patient("Alice", 2));
        facility.close();
        assert_eq!(facility.patient_count(), 1);
    }
}
