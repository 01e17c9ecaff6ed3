// Entity position classifier — where in the title the first entity appears.

use serde::Serialize;

use crate::entities::EntitySet;

/// Relative positions below this are the start of the title.
pub const START_THRESHOLD: f64 = 0.2;
/// Relative positions above this are the end of the title.
pub const END_THRESHOLD: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityPosition {
    None,
    Start,
    Middle,
    End,
}

impl EntityPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityPosition::None => "none",
            EntityPosition::Start => "start",
            EntityPosition::Middle => "middle",
            EntityPosition::End => "end",
        }
    }
}

impl std::fmt::Display for EntityPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Locate the first entity of the set in the title (ignoring case) and
/// bucket its character offset relative to the title length.
pub fn classify_entity_position(title: &str, entities: &EntitySet) -> EntityPosition {
    let Some(entity) = entities.first() else {
        return EntityPosition::None;
    };

    let title_lower = title.to_lowercase();
    let entity_lower = entity.to_lowercase();
    if entity_lower.is_empty() {
        return EntityPosition::None;
    }
    let Some(byte_index) = title_lower.find(&entity_lower) else {
        return EntityPosition::None;
    };

    let char_index = title_lower[..byte_index].chars().count();
    let length = title_lower.chars().count();
    let relative = char_index as f64 / length as f64;

    if relative < START_THRESHOLD {
        EntityPosition::Start
    } else if relative > END_THRESHOLD {
        EntityPosition::End
    } else {
        EntityPosition::Middle
    }
}
