/// Ability names produced by the resolver. Display strings are the on-screen
/// vocabulary.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ability {
    /// Nothing resolved yet.
    #[default]
    #[strum(serialize = "none")]
    None,
    #[strum(serialize = "dosis")]
    Dosis,
    #[strum(serialize = "zoe")]
    Zoe,
    #[strum(serialize = "prognosis")]
    Prognosis,
    #[strum(serialize = "eukrasian dosis!")]
    EukrasianDosis,
    #[strum(serialize = "eukrasian prognosis!")]
    EukrasianPrognosis,
    #[strum(serialize = "panhaima")]
    Panhaima,
    #[strum(serialize = "swiftcast")]
    Swiftcast,
    #[strum(serialize = "krasis")]
    Krasis,
    #[strum(serialize = "toxikon")]
    Toxikon,
    #[strum(serialize = "diagnosis")]
    Diagnosis,
    #[strum(serialize = "eukrasian diagnosis!")]
    EukrasianDiagnosis,
    #[strum(serialize = "pneuma")]
    Pneuma,
    /// Announces that enhanced mode was armed.
    #[strum(serialize = "eukrasia")]
    Eukrasia,
}

impl Ability {
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Enhanced variant used while eukrasia is armed, if this ability has one.
    pub const fn eukrasian(self) -> Option<Ability> {
        match self {
            Self::Dosis => Some(Self::EukrasianDosis),
            Self::Diagnosis => Some(Self::EukrasianDiagnosis),
            Self::Prognosis => Some(Self::EukrasianPrognosis),
            _ => None,
        }
    }

    /// True for casts that go through the global cooldown.
    pub const fn is_gcd(self) -> bool {
        matches!(
            self,
            Self::Dosis
                | Self::Diagnosis
                | Self::Prognosis
                | Self::Toxikon
                | Self::Pneuma
                | Self::EukrasianDosis
                | Self::EukrasianDiagnosis
                | Self::EukrasianPrognosis
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn vocabulary_matches_display_names() {
        let names: Vec<_> = Ability::iter().map(Ability::name).collect();
        assert_eq!(
            names,
            [
                "none",
                "dosis",
                "zoe",
                "prognosis",
                "eukrasian dosis!",
                "eukrasian prognosis!",
                "panhaima",
                "swiftcast",
                "krasis",
                "toxikon",
                "diagnosis",
                "eukrasian diagnosis!",
                "pneuma",
                "eukrasia",
            ]
        );
        assert_eq!(Ability::EukrasianDosis.to_string(), "eukrasian dosis!");
    }

    #[test]
    fn eukrasian_variants_are_gcd() {
        for ability in Ability::iter() {
            if let Some(enhanced) = ability.eukrasian() {
                assert!(ability.is_gcd());
                assert!(enhanced.is_gcd());
                assert!(enhanced.eukrasian().is_none());
            }
        }
        assert!(!Ability::Eukrasia.is_gcd());
        assert!(!Ability::Swiftcast.is_gcd());
    }
}
