use std::fmt;

/// An answer drawn from a fixed, ordered list of options.
///
/// Every option has a stable identifier (stored and serialized) and a
/// display label (shown to the user).
pub trait Choice: Copy + Eq + fmt::Debug + Sized + 'static {
    /// All options, in display order.
    const ALL: &'static [Self];

    /// Stable identifier of this option, e.g. `"semi-detached"`.
    fn id(self) -> &'static str;

    /// Display label of this option, e.g. `"Semi Detached"`.
    fn label(self) -> &'static str;

    /// Look up an option by its identifier.
    fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|choice| choice.id() == id)
    }

    /// Position of this option in [`Choice::ALL`].
    fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|choice| *choice == self)
            .unwrap_or_default()
    }
}

macro_rules! choices {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => ($id:literal, $label:literal),)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl Choice for $name {
            const ALL: &'static [Self] = &[$(Self::$variant,)+];

            fn id(self) -> &'static str {
                match self {
                    $(Self::$variant => $id,)+
                }
            }

            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.id())
            }
        }
    };
}

choices! {
    /// What sort of property is this?
    pub enum PropertyType {
        Detached => ("detached", "Detached"),
        SemiDetached => ("semi-detached", "Semi Detached"),
        Terrace => ("terrace", "Terrace"),
        Flat => ("flat", "Flat"),
        Bungalow => ("bungalow", "Bungalow"),
    }
}

choices! {
    /// Which part of the property is being extended.
    ///
    /// `GroundFloor` is never stored on its own: it opens the sub-type menu,
    /// see [`crate::ExtensionSelection`].
    pub enum ExtensionType {
        GroundFloor => ("ground-floor", "Ground Floor"),
        Loft => ("loft", "Loft"),
        FirstFloor => ("first-floor", "First Floor"),
        Other => ("other", "Other"),
    }
}

choices! {
    /// Kind of ground-floor extension.
    pub enum GroundFloorSubtype {
        Rear => ("rear", "Rear"),
        SideInfill => ("side-infill", "Side Infill"),
        Side => ("side", "Side"),
        Wraparound => ("wraparound", "Wraparound"),
        SideAndRear => ("side-and-rear", "Side and Rear"),
    }
}

choices! {
    /// Bedroom count.
    pub enum Bedrooms {
        One => ("1", "1"),
        Two => ("2", "2"),
        Three => ("3", "3"),
        Four => ("4", "4"),
        FivePlus => ("5+", "5+"),
    }
}

choices! {
    /// When the design process should start.
    pub enum Timeline {
        Asap => ("ASAP", "ASAP"),
        ThreeMonths => ("3-months", "3 Months"),
        SixMonths => ("6-months", "6 Months"),
        TwelveMonthsPlus => ("12-months-plus", "12 Months +"),
        NotSure => ("not-sure", "I'm not sure"),
    }
}

choices! {
    /// Additional services the customer is interested in.
    pub enum Service {
        ArchitecturalDrawings => ("architectural-drawings", "Architectural drawings"),
        DesignAndPlanningAdvice => ("design-and-planning-advice", "Design and planning advice"),
        BuildFinancing => ("build-financing", "Help with financing my build"),
        FindingABuilder => ("finding-a-builder", "Help finding a builder"),
        FindingOtherProfessionals => ("finding-other-professionals", "Help finding other professionals"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_lookup() {
        for property in PropertyType::ALL {
            assert_eq!(PropertyType::from_id(property.id()), Some(*property));
        }
        assert_eq!(Timeline::from_id("12-months-plus"), Some(Timeline::TwelveMonthsPlus));
        assert_eq!(Bedrooms::from_id("5+"), Some(Bedrooms::FivePlus));
    }

    #[test]
    fn unknown_id_is_rejected() {
        assert_eq!(PropertyType::from_id("castle"), None);
        assert_eq!(ExtensionType::from_id("Ground Floor"), None);
    }

    #[test]
    fn option_lists_keep_display_order() {
        let labels: Vec<_> = Timeline::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(
            labels,
            ["ASAP", "3 Months", "6 Months", "12 Months +", "I'm not sure"]
        );
        assert_eq!(ExtensionType::ALL[0], ExtensionType::GroundFloor);
        assert_eq!(Service::ALL.len(), 5);
        assert_eq!(GroundFloorSubtype::SideAndRear.index(), 4);
    }

    #[test]
    fn serializes_as_id() {
        let json = serde_json::to_string(&PropertyType::SemiDetached).unwrap();
        assert_eq!(json, "\"semi-detached\"");
    }

    #[test]
    fn displays_label() {
        assert_eq!(Service::BuildFinancing.to_string(), "Help with financing my build");
    }
}
