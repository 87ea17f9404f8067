//! Inherited-condition screening.
//!
//! The set of conditions is closed, so answers live in a fixed array indexed
//! by [`GeneticCondition`] instead of an open map. On the wire the section is
//! still the flat object stored records use: `"HasThalassemia": "true"`,
//! `"ThalassemiaRelation": "Parents"`, and so on.

use std::collections::HashMap;

use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::vocab::FamilyRelation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GeneticCondition {
    Thalassemia,
    NeuralTubeDefect,
    CongenitalHeartDefect,
    DownSyndrome,
    TaySachs,
    SickleCellDiseaseOrTrait,
    Hemophilia,
    MuscularDystrophy,
    SpinalMuscularAtrophy,
    FragileX,
    CysticFibrosis,
    HuntingtonChorea,
    RecurrentPregnancyLossOrStillbirth,
    MentalRetardationOrAutism,
    OtherInheritedGeneticDisorder,
    MaternalMetabolicDisorder,
}

impl GeneticCondition {
    pub const COUNT: usize = 16;

    /// Every condition in questionnaire order.
    pub const ALL: [GeneticCondition; Self::COUNT] = [
        Self::Thalassemia,
        Self::NeuralTubeDefect,
        Self::CongenitalHeartDefect,
        Self::DownSyndrome,
        Self::TaySachs,
        Self::SickleCellDiseaseOrTrait,
        Self::Hemophilia,
        Self::MuscularDystrophy,
        Self::SpinalMuscularAtrophy,
        Self::FragileX,
        Self::CysticFibrosis,
        Self::HuntingtonChorea,
        Self::RecurrentPregnancyLossOrStillbirth,
        Self::MentalRetardationOrAutism,
        Self::OtherInheritedGeneticDisorder,
        Self::MaternalMetabolicDisorder,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// Stored key of the yes/no flag.
    pub fn flag_key(self) -> &'static str {
        match self {
            Self::Thalassemia => "HasThalassemia",
            Self::NeuralTubeDefect => "HasNeuralTubeDefect",
            Self::CongenitalHeartDefect => "HasCongenitalHeartDefect",
            Self::DownSyndrome => "HasDownSyndrome",
            Self::TaySachs => "HasTaySachs",
            Self::SickleCellDiseaseOrTrait => "HasSickleCellDiseaseOrTrait",
            Self::Hemophilia => "HasHemophilia",
            Self::MuscularDystrophy => "HasMuscularDystrophy",
            // Misspelt in every stored record; must not be corrected.
            Self::SpinalMuscularAtrophy => "HasSinalMuscularAtrophy",
            Self::FragileX => "HasFragileX",
            Self::CysticFibrosis => "HasCysticFibrosis",
            Self::HuntingtonChorea => "HasHuntingtonChorea",
            Self::RecurrentPregnancyLossOrStillbirth => "HasRecurrentPregnancyLossOrStillbirth",
            Self::MentalRetardationOrAutism => "HasMentalRetardationOrAutism",
            Self::OtherInheritedGeneticDisorder => "HasOtherInheritedGeneticDisorder",
            Self::MaternalMetabolicDisorder => "HasMaternalMetabolicDisorder",
        }
    }

    /// Stored key of the paired relation.
    pub fn relation_key(self) -> &'static str {
        match self {
            Self::Thalassemia => "ThalassemiaRelation",
            Self::NeuralTubeDefect => "NeuralTubeDefectRelation",
            Self::CongenitalHeartDefect => "CongenitalHeartDefectRelation",
            Self::DownSyndrome => "DownSyndromeRelation",
            Self::TaySachs => "TaySachsRelation",
            Self::SickleCellDiseaseOrTrait => "SickleCellDiseaseOrTraitRelation",
            Self::Hemophilia => "HemophiliaRelation",
            Self::MuscularDystrophy => "MuscularDystrophyRelation",
            Self::SpinalMuscularAtrophy => "SinalMuscularAtrophyRelation",
            Self::FragileX => "FragileXRelation",
            Self::CysticFibrosis => "CysticFibrosisRelation",
            Self::HuntingtonChorea => "HuntingtonChoreaRelation",
            Self::RecurrentPregnancyLossOrStillbirth => {
                "RecurrentPregnancyLossOrStillbirthRelation"
            }
            Self::MentalRetardationOrAutism => "MentalRetardationOrAutismRelation",
            Self::OtherInheritedGeneticDisorder => "OtherInheritedGeneticDisorderRelation",
            Self::MaternalMetabolicDisorder => "MaternalMetabolicDisorderRelation",
        }
    }

    /// Display label derived from the flag key: `HasDownSyndrome` → `Down Syndrome`.
    pub fn label(self) -> String {
        let key = self.flag_key();
        let name = key.strip_prefix("Has").unwrap_or(key);
        let mut label = String::with_capacity(name.len() + 4);
        let mut prev_lower = false;
        for ch in name.chars() {
            if prev_lower && ch.is_ascii_uppercase() {
                label.push(' ');
            }
            prev_lower = ch.is_ascii_lowercase();
            label.push(ch);
        }
        label
    }

    pub fn from_flag_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.flag_key() == key)
    }

    pub fn from_relation_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.relation_key() == key)
    }
}

/// The answer for one condition. `flag` is tri-state: unanswered, yes, or no.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneticAnswer {
    pub flag: Option<bool>,
    pub relation: Option<FamilyRelation>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneticsCondition {
    answers: [GeneticAnswer; GeneticCondition::COUNT],
}

impl GeneticsCondition {
    pub fn answer(&self, condition: GeneticCondition) -> GeneticAnswer {
        self.answers[condition.index()]
    }

    pub fn flag(&self, condition: GeneticCondition) -> Option<bool> {
        self.answer(condition).flag
    }

    pub fn relation(&self, condition: GeneticCondition) -> Option<FamilyRelation> {
        self.answer(condition).relation
    }

    /// A copy with `condition`'s flag set. Any answer other than yes also
    /// clears the paired relation.
    pub fn with_flag(&self, condition: GeneticCondition, flag: Option<bool>) -> Self {
        let mut next = self.clone();
        let answer = &mut next.answers[condition.index()];
        answer.flag = flag;
        if flag != Some(true) {
            answer.relation = None;
        }
        next
    }

    /// A copy with `condition`'s relation set. The flag is left alone.
    pub fn with_relation(
        &self,
        condition: GeneticCondition,
        relation: Option<FamilyRelation>,
    ) -> Self {
        let mut next = self.clone();
        next.answers[condition.index()].relation = relation;
        next
    }

    /// Every condition with its answer, in questionnaire order.
    pub fn iter(&self) -> impl Iterator<Item = (GeneticCondition, GeneticAnswer)> + '_ {
        GeneticCondition::ALL
            .into_iter()
            .map(|condition| (condition, self.answer(condition)))
    }
}

impl Serialize for GeneticsCondition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (condition, answer) in self.iter() {
            if let Some(flag) = answer.flag {
                map.serialize_entry(condition.flag_key(), if flag { "true" } else { "false" })?;
            }
            if let Some(relation) = answer.relation {
                map.serialize_entry(condition.relation_key(), relation.key())?;
            }
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for GeneticsCondition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Values stay raw until the key is known; unknown keys are never
        // interpreted, whatever they hold.
        let raw = Option::<HashMap<String, Value>>::deserialize(deserializer)?
            .unwrap_or_default();

        let mut genetics = GeneticsCondition::default();
        for (key, value) in raw {
            if let Some(condition) = GeneticCondition::from_flag_key(&key) {
                // Stored flags are strings; JSON booleans are accepted too.
                let flag = match value {
                    Value::Null => continue,
                    Value::Bool(flag) => flag,
                    Value::String(text) if text == "true" => true,
                    Value::String(text) if text == "false" => false,
                    other => {
                        return Err(D::Error::custom(format!(
                            "invalid value {other} for {key}: expected \"true\" or \"false\""
                        )));
                    }
                };
                genetics.answers[condition.index()].flag = Some(flag);
            } else if let Some(condition) = GeneticCondition::from_relation_key(&key) {
                let text = match value {
                    Value::Null => continue,
                    Value::String(text) if text.is_empty() => continue,
                    Value::String(text) => text,
                    other => {
                        return Err(D::Error::custom(format!(
                            "invalid value {other} for {key}: expected a family relation"
                        )));
                    }
                };
                let relation = FamilyRelation::from_key(&text).ok_or_else(|| {
                    D::Error::custom(format!("unknown family relation {text:?} for {key}"))
                })?;
                genetics.answers[condition.index()].relation = Some(relation);
            }
        }
        Ok(genetics)
    }
}
