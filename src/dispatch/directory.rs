use crate::core::graph::road_network::{CityId, RoadNetwork};
use crate::dispatch::error::DispatchError;
use crate::dispatch::facility::Facility;
use crate::dispatch::patient::{Patient, Severity};
use crate::dispatch::report::{Admission, CloseReport, FacilityStatus, OpenReport, TreatReport};
use crate::dispatch::topology::Road;

/// The dispatch network: road graph, one facility per city, and the
/// all-pairs shortest-distance table.
///
/// The table is computed once at construction. The topology is immutable
/// afterwards, so every later distance lookup is O(1).
///
/// This struct is the single owner of all dispatch state; callers keep
/// one instance and pass it to their command handlers.
#[derive(Debug, Clone)]
pub struct DispatchDirectory {
    network: RoadNetwork,
    facilities: Vec<Facility>,
    distances: Vec<Vec<Option<u32>>>,
}

impl DispatchDirectory {
    /// Build the directory from a road list.
    ///
    /// Registers every road, creates an open facility per city, and
    /// precomputes shortest paths from each city.
    pub fn new(roads: &[Road]) -> Self {
        let mut network = RoadNetwork::new();
        for road in roads {
            network.add_road(&road.from, &road.to, road.miles);
        }

        let facilities = network
            .cities_iter()
            .map(|(city, _)| Facility::new(city))
            .collect::<Vec<_>>();

        let distances = network
            .cities_iter()
            .map(|(city, _)| network.shortest_paths(city, &[]))
            .collect::<Vec<_>>();

        log::debug!(
            "dispatch directory initialized: {} cities, {} distance rows",
            network.city_count(),
            distances.len()
        );

        Self {
            network,
            facilities,
            distances,
        }
    }

    pub fn city_count(&self) -> usize {
        self.network.city_count()
    }

    pub fn is_known_city(&self, label: &str) -> bool {
        self.network.has_city(label)
    }

    /// Look up the precomputed shortest distance between two cities.
    ///
    /// `None` means an unknown city or no connecting path.
    pub fn distance(&self, from: &str, to: &str) -> Option<u32> {
        let from = self.network.city_id(from)?;
        let to = self.network.city_id(to)?;
        self.distances[from.as_num()][to.as_num()]
    }

    /// Route a new emergency to the nearest open facility.
    pub fn route_emergency(
        &mut self,
        name: &str,
        severity: Severity,
        origin: &str,
    ) -> Result<Admission, DispatchError> {
        let origin_id = self.known_city(origin)?;
        let (facility_city, distance) = self
            .nearest_open_facility(origin_id)
            .ok_or_else(|| DispatchError::NoOpenFacility(origin.to_string()))?;

        let facility = self.network.label(facility_city).to_string();
        log::info!(
            "admitting {} (severity {}) from {} to {}",
            name,
            severity,
            origin,
            facility
        );
        self.facilities[facility_city.as_num()]
            .admit(Patient::new(name, severity, origin));

        Ok(Admission { facility, distance })
    }

    /// Close a facility, transferring its queue to the nearest open
    /// facility if it holds any patients.
    pub fn close_facility(&mut self, label: &str) -> Result<CloseReport, DispatchError> {
        let city = self.known_city(label)?;
        if !self.facilities[city.as_num()].close() {
            return Ok(CloseReport::AlreadyClosed);
        }

        if !self.facilities[city.as_num()].has_patients() {
            log::info!("closed facility at {}", label);
            return Ok(CloseReport::Closed);
        }

        let count = self.facilities[city.as_num()].patient_count();
        match self.nearest_open_facility(city) {
            Some((destination_city, _)) => {
                let destination = self.network.label(destination_city).to_string();
                let (source, target) = self.facility_pair_mut(city, destination_city);
                target.absorb(source);
                log::info!(
                    "closed facility at {}, transferred {} patients to {}",
                    label,
                    count,
                    destination
                );
                Ok(CloseReport::Transferred { count, destination })
            }
            None => {
                log::warn!(
                    "closed facility at {}, {} patients stranded: no open facility",
                    label,
                    count
                );
                Ok(CloseReport::Stranded { count })
            }
        }
    }

    /// Reopen a facility.
    pub fn open_facility(&mut self, label: &str) -> Result<OpenReport, DispatchError> {
        let city = self.known_city(label)?;
        if self.facilities[city.as_num()].open() {
            log::info!("opened facility at {}", label);
            Ok(OpenReport::Opened)
        } else {
            Ok(OpenReport::AlreadyOpen)
        }
    }

    /// Treat the most urgent patient at an open facility.
    pub fn treat_next(&mut self, label: &str) -> Result<TreatReport, DispatchError> {
        let city = self.known_city(label)?;
        let facility = &mut self.facilities[city.as_num()];
        if !facility.is_open() {
            return Err(DispatchError::FacilityClosed(label.to_string()));
        }
        match facility.treat() {
            Some(patient) => {
                log::info!(
                    "treating {} (severity {}) from {} at {}",
                    patient.name,
                    patient.severity,
                    patient.origin,
                    label
                );
                Ok(TreatReport::Treated(patient))
            }
            None => Ok(TreatReport::NoPatients),
        }
    }

    /// Snapshot of every facility, in city-registration order.
    pub fn status(&self) -> Vec<FacilityStatus> {
        self.network
            .cities_iter()
            .map(|(city, label)| {
                let facility = &self.facilities[city.as_num()];
                FacilityStatus {
                    city: label.to_string(),
                    is_open: facility.is_open(),
                    patients_waiting: facility.patient_count(),
                    next_patient: facility.next_patient().cloned(),
                }
            })
            .collect()
    }

    fn known_city(&self, label: &str) -> Result<CityId, DispatchError> {
        self.network
            .city_id(label)
            .ok_or_else(|| DispatchError::UnknownCity(label.to_string()))
    }

    /// Find the open facility with minimum precomputed distance from the
    /// origin city.
    ///
    /// The scan walks the distance row in registration order with a
    /// strict comparison, so distance ties resolve to the
    /// earliest-registered city.
    fn nearest_open_facility(&self, origin: CityId) -> Option<(CityId, u32)> {
        let row = &self.distances[origin.as_num()];
        let mut nearest: Option<(CityId, u32)> = None;
        for (index, facility) in self.facilities.iter().enumerate() {
            if !facility.is_open() {
                continue;
            }
            if let Some(distance) = row[index] {
                if nearest.map_or(true, |(_, best)| distance < best) {
                    nearest = Some((CityId::new(index), distance));
                }
            }
        }
        nearest
    }

    /// Borrow two distinct facilities mutably, in argument order.
    fn facility_pair_mut(&mut self, a: CityId, b: CityId) -> (&mut Facility, &mut Facility) {
        let (a, b) = (a.as_num(), b.as_num());
        debug_assert_ne!(a, b);
        if a < b {
            let (left, right) = self.facilities.split_at_mut(b);
            (&mut left[a], &mut right[0])
        } else {
            let (left, right) = self.facilities.split_at_mut(a);
            (&mut right[0], &mut left[b])
        }
    }
}
