//! Hand-written value/builder pairs for unit tests inside this crate.

use serde::{Deserialize, Deserializer, Serialize};

use crate::{Builder, Field, HasBuilder};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Note {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NoteBuilder {
    #[serde(default, skip_serializing_if = "Field::is_omitted")]
    pub title: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_omitted")]
    pub lines: Field<Vec<String>>,
}

impl<'de> Deserialize<'de> for Note {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        crate::routing::deserialize_via_builder(deserializer)
    }
}

impl HasBuilder for Note {
    type Builder = NoteBuilder;

    fn to_builder(&self) -> NoteBuilder {
        NoteBuilder {
            title: self.title.clone().into(),
            lines: self.lines.clone().into(),
        }
    }
}

impl Builder for NoteBuilder {
    type Value = Note;

    fn build(&self) -> Note {
        Note {
            title: self.title.to_option(),
            lines: self.lines.to_option(),
        }
    }

    fn overlay(&mut self, staged: Self) {
        if !staged.title.is_missing() {
            self.title = staged.title;
        }
        if !staged.lines.is_missing() {
            self.lines = staged.lines;
        }
    }
}

/// A second pair whose value decodes straight from its own shape, used to
/// exercise bindings that disagree with a type's declaration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Stamp {
    pub at: Option<u64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StampBuilder {
    #[serde(default)]
    pub at: Field<u64>,
}

impl HasBuilder for Stamp {
    type Builder = StampBuilder;

    fn to_builder(&self) -> StampBuilder {
        StampBuilder {
            at: self.at.into(),
        }
    }
}

impl Builder for StampBuilder {
    type Value = Stamp;

    fn build(&self) -> Stamp {
        Stamp {
            at: self.at.to_option(),
        }
    }

    fn overlay(&mut self, staged: Self) {
        if !staged.at.is_missing() {
            self.at = staged.at;
        }
    }
}

pub fn note(title: &str, lines: &[&str]) -> Note {
    Note {
        title: Some(title.to_owned()),
        lines: Some(lines.iter().map(|line| (*line).to_owned()).collect()),
    }
}
