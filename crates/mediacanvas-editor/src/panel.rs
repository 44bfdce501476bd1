//! Property panel: binds the numeric inputs to the editing facade.

use crate::editing::MediaEditor;
use crate::input::NumericInput;
use crate::item::MediaItem;
use mediacanvas_core::InputConfig;

/// An editable field of the selected item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Width,
    Height,
    StartTime,
    EndTime,
}

impl Property {
    pub const ALL: [Property; 4] = [
        Property::Width,
        Property::Height,
        Property::StartTime,
        Property::EndTime,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Width => "Width",
            Self::Height => "Height",
            Self::StartTime => "Start Time (s)",
            Self::EndTime => "End Time (s)",
        }
    }

    pub fn value(self, item: &MediaItem) -> f64 {
        match self {
            Self::Width => item.width,
            Self::Height => item.height,
            Self::StartTime => item.start_time,
            Self::EndTime => item.end_time,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PropertyPanel {
    width: NumericInput,
    height: NumericInput,
    start_time: NumericInput,
    end_time: NumericInput,
}

impl PropertyPanel {
    pub fn new(config: &InputConfig) -> Self {
        Self {
            width: NumericInput::dimension(Property::Width.label()).with_range(config.dimension),
            height: NumericInput::dimension(Property::Height.label()).with_range(config.dimension),
            start_time: NumericInput::time(Property::StartTime.label()).with_range(config.time),
            end_time: NumericInput::time(Property::EndTime.label()).with_range(config.time),
        }
    }

    pub fn input(&self, property: Property) -> &NumericInput {
        match property {
            Property::Width => &self.width,
            Property::Height => &self.height,
            Property::StartTime => &self.start_time,
            Property::EndTime => &self.end_time,
        }
    }

    /// Apply a raw edit to the editor's item. The untouched partner field
    /// (height for width, end for start, ...) keeps its stored value.
    ///
    /// Returns `false` when nothing is selected or the input was rejected.
    pub fn edit(&self, editor: &MediaEditor<'_>, property: Property, raw: &str) -> bool {
        let Some(item) = editor.selected_media() else {
            return false;
        };
        self.input(property).commit(raw, |value| match property {
            Property::Width => editor.update_dimensions(value, item.height),
            Property::Height => editor.update_dimensions(item.width, value),
            Property::StartTime => editor.update_time_range(value, item.end_time),
            Property::EndTime => editor.update_time_range(item.start_time, value),
        })
    }

    /// Label and display text for every field of `item`.
    pub fn fields(&self, item: &MediaItem) -> Vec<(&str, String)> {
        Property::ALL
            .iter()
            .map(|&property| {
                let input = self.input(property);
                (input.label(), input.display(property.value(item)))
            })
            .collect()
    }
}

impl Default for PropertyPanel {
    fn default() -> Self {
        Self::new(&InputConfig::default())
    }
}
