use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::{ExtensionType, GroundFloorSubtype};

/// The extension answer, with the ground-floor sub-type folded in.
///
/// A ground-floor extension always carries its sub-type, and no other
/// extension type can, so the two answers cannot drift apart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ExtensionSelection {
    #[default]
    None,
    Loft,
    FirstFloor,
    Other,
    GroundFloor(GroundFloorSubtype),
}

impl ExtensionSelection {
    /// Selection for a plain (non ground-floor) extension type.
    ///
    /// Returns `None` for [`ExtensionType::GroundFloor`], which can only be
    /// selected together with a sub-type.
    pub fn plain(extension: ExtensionType) -> Option<Self> {
        match extension {
            ExtensionType::GroundFloor => None,
            ExtensionType::Loft => Some(Self::Loft),
            ExtensionType::FirstFloor => Some(Self::FirstFloor),
            ExtensionType::Other => Some(Self::Other),
        }
    }

    pub fn extension_type(&self) -> Option<ExtensionType> {
        match self {
            Self::None => None,
            Self::Loft => Some(ExtensionType::Loft),
            Self::FirstFloor => Some(ExtensionType::FirstFloor),
            Self::Other => Some(ExtensionType::Other),
            Self::GroundFloor(_) => Some(ExtensionType::GroundFloor),
        }
    }

    pub fn ground_floor_subtype(&self) -> Option<GroundFloorSubtype> {
        match self {
            Self::GroundFloor(subtype) => Some(*subtype),
            _ => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

// Flattened into the Answer Set as `extensionType` + `groundFloorSubtype`.
impl Serialize for ExtensionSelection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ExtensionSelection", 2)?;
        state.serialize_field("extensionType", &self.extension_type())?;
        state.serialize_field("groundFloorSubtype", &self.ground_floor_subtype())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projections() {
        let rear = ExtensionSelection::GroundFloor(GroundFloorSubtype::Rear);
        assert_eq!(rear.extension_type(), Some(ExtensionType::GroundFloor));
        assert_eq!(rear.ground_floor_subtype(), Some(GroundFloorSubtype::Rear));

        assert_eq!(ExtensionSelection::Loft.extension_type(), Some(ExtensionType::Loft));
        assert_eq!(ExtensionSelection::Loft.ground_floor_subtype(), None);

        assert_eq!(ExtensionSelection::None.extension_type(), None);
        assert!(ExtensionSelection::default().is_none());
    }

    #[test]
    fn ground_floor_has_no_plain_selection() {
        assert_eq!(ExtensionSelection::plain(ExtensionType::GroundFloor), None);
        assert_eq!(
            ExtensionSelection::plain(ExtensionType::FirstFloor),
            Some(ExtensionSelection::FirstFloor)
        );
    }

    #[test]
    fn serializes_both_fields() {
        let json =
            serde_json::to_value(ExtensionSelection::GroundFloor(GroundFloorSubtype::SideInfill))
                .unwrap();
        assert_eq!(json["extensionType"], "ground-floor");
        assert_eq!(json["groundFloorSubtype"], "side-infill");

        let json = serde_json::to_value(ExtensionSelection::Other).unwrap();
        assert_eq!(json["extensionType"], "other");
        assert!(json["groundFloorSubtype"].is_null());
    }
}
