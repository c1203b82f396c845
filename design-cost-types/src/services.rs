use serde::Serialize;

use crate::Service;

/// The services question: any number of options, kept in the order they
/// were first selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ServiceSet {
    selected: Vec<Service>,
}

impl ServiceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the service if absent, remove it if present.
    ///
    /// Returns whether the service is selected afterwards.
    pub fn toggle(&mut self, service: Service) -> bool {
        if let Some(pos) = self.selected.iter().position(|s| *s == service) {
            self.selected.remove(pos);
            false
        } else {
            self.selected.push(service);
            true
        }
    }

    pub fn contains(&self, service: Service) -> bool {
        self.selected.contains(&service)
    }

    pub fn iter(&self) -> impl Iterator<Item = Service> + '_ {
        self.selected.iter().copied()
    }

    pub fn as_slice(&self) -> &[Service] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

impl FromIterator<Service> for ServiceSet {
    fn from_iter<I: IntoIterator<Item = Service>>(iter: I) -> Self {
        let mut set = Self::new();
        for service in iter {
            if !set.contains(service) {
                set.toggle(service);
            }
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut set = ServiceSet::new();
        assert!(set.toggle(Service::FindingABuilder));
        assert!(set.contains(Service::FindingABuilder));
        assert!(!set.toggle(Service::FindingABuilder));
        assert!(set.is_empty());
    }

    #[test]
    fn keeps_first_selected_first() {
        let mut set = ServiceSet::new();
        set.toggle(Service::BuildFinancing);
        set.toggle(Service::ArchitecturalDrawings);
        set.toggle(Service::FindingABuilder);
        set.toggle(Service::ArchitecturalDrawings);
        assert_eq!(
            set.as_slice(),
            [Service::BuildFinancing, Service::FindingABuilder]
        );
    }

    #[test]
    fn collect_ignores_duplicates() {
        let set: ServiceSet = [Service::BuildFinancing, Service::BuildFinancing]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn serializes_as_id_list() {
        let set: ServiceSet = [Service::FindingOtherProfessionals, Service::ArchitecturalDrawings]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(
            json,
            r#"["finding-other-professionals","architectural-drawings"]"#
        );
    }
}
