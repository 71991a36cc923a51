//! Which city (and date) the visitor picked, and what the pointer is over.
//!
//! The modal is open exactly while [`SelectedCity`] holds a value. Other
//! crates never write it directly; they send a [`SelectionRequest`] and
//! [`apply_selection_requests`] validates it against the roster.

use bevy::prelude::*;

use crate::config::FRUIT_PER_FROND;
use crate::roster::CityRoster;

// =============================================================================
// Types
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    pub city: usize,
    /// `None` when the city was picked from its label or the city list.
    pub date: Option<usize>,
}

#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SelectedCity(pub Option<Selection>);

impl SelectedCity {
    pub fn is_open(&self) -> bool {
        self.0.is_some()
    }
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionRequest {
    DateClicked { city: usize, date: usize },
    CityClicked { city: usize },
    /// Modal dismissed (close button, backdrop, Escape).
    Cleared,
}

/// Fruit or label currently under the pointer.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HoverState {
    pub fruit: Option<(usize, usize)>,
    pub label: Option<usize>,
}

impl HoverState {
    pub fn is_fruit_hovered(&self, city: usize, date: usize) -> bool {
        self.fruit == Some((city, date))
    }
}

/// Cursor the window should show; applied by the rendering crate.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CursorKind {
    #[default]
    Default,
    Pointer,
}

pub fn desired_cursor(hover: &HoverState) -> CursorKind {
    if hover.fruit.is_some() || hover.label.is_some() {
        CursorKind::Pointer
    } else {
        CursorKind::Default
    }
}

// =============================================================================
// Pure transition
// =============================================================================

/// Selection after `request`; `Err` hands back a request that points
/// outside the roster.
pub fn transition(
    request: SelectionRequest,
    city_count: usize,
) -> Result<Option<Selection>, SelectionRequest> {
    match request {
        SelectionRequest::DateClicked { city, date } => {
            if city < city_count && date < FRUIT_PER_FROND {
                Ok(Some(Selection {
                    city,
                    date: Some(date),
                }))
            } else {
                Err(request)
            }
        }
        SelectionRequest::CityClicked { city } => {
            if city < city_count {
                Ok(Some(Selection { city, date: None }))
            } else {
                Err(request)
            }
        }
        SelectionRequest::Cleared => Ok(None),
    }
}

// =============================================================================
// Systems
// =============================================================================

pub fn apply_selection_requests(
    mut requests: EventReader<SelectionRequest>,
    roster: Res<CityRoster>,
    mut selected: ResMut<SelectedCity>,
) {
    for &request in requests.read() {
        match transition(request, roster.branch_count()) {
            Ok(next) => {
                if next == selected.0 {
                    continue;
                }
                match next {
                    Some(sel) => {
                        let name = roster.get(sel.city).map_or("?", |c| c.name.as_str());
                        info!("Selected {name} (branch {}, date {:?})", sel.city, sel.date);
                    }
                    None => info!("Selection cleared"),
                }
                selected.0 = next;
            }
            Err(bad) => warn!("Ignoring out-of-range selection request {bad:?}"),
        }
    }
}

/// Drop a selection that no longer points into the roster.
pub fn clear_stale_selection(roster: Res<CityRoster>, mut selected: ResMut<SelectedCity>) {
    if !roster.is_changed() {
        return;
    }
    if let Some(sel) = selected.0 {
        if sel.city >= roster.branch_count() {
            warn!("Roster shrank below selected branch {}; clearing", sel.city);
            selected.0 = None;
        }
    }
}

/// Nothing can be hovered while the modal covers the scene.
pub fn clear_hover_while_open(selected: Res<SelectedCity>, mut hover: ResMut<HoverState>) {
    if selected.is_open() && *hover != HoverState::default() {
        *hover = HoverState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_click_selects_city_and_date() {
        let next = transition(SelectionRequest::DateClicked { city: 5, date: 3 }, 24);
        assert_eq!(
            next,
            Ok(Some(Selection {
                city: 5,
                date: Some(3)
            }))
        );
    }

    #[test]
    fn test_city_click_has_no_date() {
        let next = transition(SelectionRequest::CityClicked { city: 0 }, 24);
        assert_eq!(next, Ok(Some(Selection { city: 0, date: None })));
    }

    #[test]
    fn test_clear_resets() {
        assert_eq!(transition(SelectionRequest::Cleared, 24), Ok(None));
        assert_eq!(transition(SelectionRequest::Cleared, 0), Ok(None));
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(transition(SelectionRequest::CityClicked { city: 24 }, 24).is_err());
        assert!(transition(
            SelectionRequest::DateClicked {
                city: 0,
                date: FRUIT_PER_FROND
            },
            24
        )
        .is_err());
    }

    #[test]
    fn test_cursor_mapping() {
        assert_eq!(desired_cursor(&HoverState::default()), CursorKind::Default);
        let fruit = HoverState {
            fruit: Some((0, 0)),
            label: None,
        };
        assert_eq!(desired_cursor(&fruit), CursorKind::Pointer);
        let label = HoverState {
            fruit: None,
            label: Some(3),
        };
        assert_eq!(desired_cursor(&label), CursorKind::Pointer);
    }

    #[test]
    fn test_hover_lookup() {
        let hover = HoverState {
            fruit: Some((5, 3)),
            label: None,
        };
        assert!(hover.is_fruit_hovered(5, 3));
        assert!(!hover.is_fruit_hovered(3, 5));
    }
}
