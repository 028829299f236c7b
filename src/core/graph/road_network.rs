use std::collections::BTreeMap;

/// ID for identifying a city in the network.
///
/// Ids are assigned in registration order, so ordering two ids compares
/// which city was registered first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CityId(usize);

impl CityId {
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    pub fn as_num(&self) -> usize {
        self.0
    }
}

/// One directed arc of an undirected road.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoadEdge {
    pub to: CityId,
    pub weight: u32,
}

/// Undirected weighted graph over city labels.
///
/// This struct provides:
///  - incremental construction (add city, add road).
///  - single-source shortest paths to all reachable cities, with an
///    optional exclusion set of cities treated as already visited.
///
/// Labels are interned to [`CityId`] indices on registration. The
/// adjacency lists are kept symmetric: adding a road inserts one arc in
/// each direction. Arcs are stored in insertion order and duplicates are
/// kept as-is.
#[derive(Debug, Clone, Default)]
pub struct RoadNetwork {
    labels: Vec<String>,
    ids: BTreeMap<String, CityId>,
    adjacency: Vec<Vec<RoadEdge>>,
}

impl RoadNetwork {
    /// Create an empty network.
    pub fn new() -> Self {
        Self {
            labels: Vec::new(),
            ids: BTreeMap::new(),
            adjacency: Vec::new(),
        }
    }

    /// Register a city, or return the existing id if the label is already
    /// known.
    pub fn add_city(&mut self, label: &str) -> CityId {
        if let Some(id) = self.ids.get(label) {
            return *id;
        }
        let id = CityId::new(self.labels.len());
        self.labels.push(label.to_string());
        self.ids.insert(label.to_string(), id);
        self.adjacency.push(Vec::new());
        id
    }

    /// Add an undirected road between two cities, registering both
    /// endpoints if needed.
    pub fn add_road(&mut self, from: &str, to: &str, weight: u32) -> (CityId, CityId) {
        let from = self.add_city(from);
        let to = self.add_city(to);
        self.adjacency[from.as_num()].push(RoadEdge { to, weight });
        self.adjacency[to.as_num()].push(RoadEdge { to: from, weight });
        (from, to)
    }

    /// Look up the id of a registered city.
    pub fn city_id(&self, label: &str) -> Option<CityId> {
        self.ids.get(label).copied()
    }

    pub fn has_city(&self, label: &str) -> bool {
        self.ids.contains_key(label)
    }

    /// Get the label of a city.
    pub fn label(&self, city: CityId) -> &str {
        &self.labels[city.as_num()]
    }

    pub fn city_count(&self) -> usize {
        self.labels.len()
    }

    /// Get cities in registration order.
    pub fn cities_iter(&self) -> impl Iterator<Item = (CityId, &str)> {
        self.labels
            .iter()
            .enumerate()
            .map(|(index, label)| (CityId::new(index), label.as_str()))
    }

    /// Get the incident arcs of a city. Unregistered ids have none.
    pub fn neighbors(&self, city: CityId) -> &[RoadEdge] {
        self.adjacency
            .get(city.as_num())
            .map(|edges| edges.as_slice())
            .unwrap_or(&[])
    }

    /// Compute shortest distances from `source` to every city.
    ///
    /// The result is indexed by [`CityId`]; unreachable cities are `None`.
    /// Cities in `excluded` are treated as already finalized, so no path
    /// may pass through them.
    ///
    /// The selection loop scans every city per round, which is O(V²) over
    /// the whole run. When several unfinalized cities share the minimum
    /// tentative distance, the lowest id wins.
    pub fn shortest_paths(&self, source: CityId, excluded: &[CityId]) -> Vec<Option<u32>> {
        let city_count = self.labels.len();
        let mut distances: Vec<Option<u32>> = vec![None; city_count];
        let mut finalized = vec![false; city_count];

        for city in excluded {
            if city.as_num() < city_count {
                finalized[city.as_num()] = true;
            }
        }
        if source.as_num() >= city_count {
            return distances;
        }
        distances[source.as_num()] = Some(0);

        loop {
            let selected = (0..city_count)
                .filter(|&index| !finalized[index])
                .filter_map(|index| distances[index].map(|distance| (index, distance)))
                .min_by_key(|&(index, distance)| (distance, index));

            let (current, current_distance) = match selected {
                Some(selected) => selected,
                // Every remaining city is unreachable.
                None => break,
            };
            finalized[current] = true;

            for edge in &self.adjacency[current] {
                let neighbor = edge.to.as_num();
                if finalized[neighbor] {
                    continue;
                }
                let relaxed = current_distance + edge.weight;
                if distances[neighbor].map_or(true, |known| relaxed < known) {
                    distances[neighbor] = Some(relaxed);
                }
            }
        }

        distances
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palouse_network() -> RoadNetwork {
        let mut network = RoadNetwork::new();
        network.add_road("Pullman", "Moscow", 8);
        network.add_road("Pullman", "Colfax", 17);
        network.add_road("Pullman", "Lewiston", 30);
        network.add_road("Moscow", "Lewiston", 32);
        network.add_road("Moscow", "Spokane", 85);
        network.add_road("Colfax", "Spokane", 50);
        network
    }

    fn distance(network: &RoadNetwork, row: &[Option<u32>], label: &str) -> Option<u32> {
        row[network.city_id(label).unwrap().as_num()]
    }

    #[test]
    fn test_registration_order_is_first_seen() {
        let network = palouse_network();
        let labels = network
            .cities_iter()
            .map(|(_, label)| label)
            .collect::<Vec<_>>();
        assert_eq!(
            labels,
            vec!["Pullman", "Moscow", "Colfax", "Lewiston", "Spokane"]
        );
    }

    #[test]
    fn test_add_city_is_idempotent() {
        let mut network = RoadNetwork::new();
        let first = network.add_city("Pullman");
        let second = network.add_city("Pullman");
        assert_eq!(first, second);
        assert_eq!(network.city_count(), 1);
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        let mut network = RoadNetwork::new();
        let (from, to) = network.add_road("Pullman", "Moscow", 8);
        assert!(network.neighbors(from).iter().any(|edge| edge.to == to));
        assert!(network.neighbors(to).iter().any(|edge| edge.to == from));
    }

    #[test]
    fn test_duplicate_roads_are_kept() {
        let mut network = RoadNetwork::new();
        network.add_road("Pullman", "Moscow", 8);
        network.add_road("Pullman", "Moscow", 8);
        let pullman = network.city_id("Pullman").unwrap();
        assert_eq!(network.neighbors(pullman).len(), 2);

        // Shortest distances are unaffected by the duplicate.
        let row = network.shortest_paths(pullman, &[]);
        assert_eq!(distance(&network, &row, "Moscow"), Some(8));
    }

    #[test]
    fn test_shortest_paths_reference_topology() {
        let network = palouse_network();
        let pullman = network.city_id("Pullman").unwrap();
        let row = network.shortest_paths(pullman, &[]);

        assert_eq!(distance(&network, &row, "Pullman"), Some(0));
        assert_eq!(distance(&network, &row, "Moscow"), Some(8));
        assert_eq!(distance(&network, &row, "Colfax"), Some(17));
        // Direct road beats the Moscow detour (8 + 32 = 40).
        assert_eq!(distance(&network, &row, "Lewiston"), Some(30));
        // Via Colfax (17 + 50) beats via Moscow (8 + 85 = 93).
        assert_eq!(distance(&network, &row, "Spokane"), Some(67));
    }

    #[test]
    fn test_shortest_paths_with_exclusion() {
        let network = palouse_network();
        let pullman = network.city_id("Pullman").unwrap();
        let moscow = network.city_id("Moscow").unwrap();
        let row = network.shortest_paths(pullman, &[moscow]);

        // The direct road to Lewiston does not pass through Moscow.
        assert_eq!(distance(&network, &row, "Lewiston"), Some(30));
        // Without Moscow, Spokane is only reachable via Colfax.
        assert_eq!(distance(&network, &row, "Spokane"), Some(67));
        // The excluded city itself is never relaxed.
        assert_eq!(distance(&network, &row, "Moscow"), None);
    }

    #[test]
    fn test_unreachable_city_has_no_distance() {
        let mut network = palouse_network();
        network.add_city("Walla Walla");
        let pullman = network.city_id("Pullman").unwrap();
        let row = network.shortest_paths(pullman, &[]);

        assert_eq!(distance(&network, &row, "Walla Walla"), None);
        assert_eq!(distance(&network, &row, "Spokane"), Some(67));
    }

    #[test]
    fn test_neighbors_of_unregistered_city_is_empty() {
        let network = palouse_network();
        assert!(network.neighbors(CityId::new(99)).is_empty());
    }
}
