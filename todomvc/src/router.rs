//! URL fragment routing.
//!
//! The fragment is the only source of the active filter. Unrecognized
//! segments are kept verbatim and show every item.

use crate::types::Filter;

/// A parsed URL fragment
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    /// One of the known filters
    Filter(Filter),
    /// A segment naming no filter, kept as typed
    Unrecognized(String),
}

impl Default for Route {
    fn default() -> Self {
        Self::Filter(Filter::All)
    }
}

impl Route {
    /// Parse a fragment
    ///
    /// `#/active`, `/active` and `active` are equivalent. An empty fragment
    /// is the `all` route.
    #[must_use]
    pub fn parse(fragment: &str) -> Self {
        let segment = fragment.trim();
        let segment = segment.strip_prefix('#').unwrap_or(segment);
        let segment = segment.strip_prefix('/').unwrap_or(segment);

        if segment.is_empty() {
            return Self::default();
        }
        Filter::from_segment(segment)
            .map_or_else(|| Self::Unrecognized(segment.to_string()), Self::Filter)
    }

    /// The filter this route applies
    #[must_use]
    pub const fn filter(&self) -> Filter {
        match self {
            Self::Filter(filter) => *filter,
            Self::Unrecognized(_) => Filter::All,
        }
    }

    /// The canonical fragment for this route
    #[must_use]
    pub fn fragment(&self) -> String {
        match self {
            Self::Filter(filter) => fragment_for(*filter),
            Self::Unrecognized(segment) => format!("#/{segment}"),
        }
    }

    /// Whether the footer link for `filter` is highlighted
    #[must_use]
    pub fn is_selected(&self, filter: Filter) -> bool {
        matches!(self, Self::Filter(f) if *f == filter)
    }
}

/// Fragment linking to `filter`
#[must_use]
pub fn fragment_for(filter: Filter) -> String {
    format!("#/{}", filter.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_shapes() {
        for fragment in ["#/active", "/active", "active", " #/active "] {
            assert_eq!(Route::parse(fragment), Route::Filter(Filter::Active), "{fragment}");
        }
    }

    #[test]
    fn empty_is_all() {
        for fragment in ["", "#", "#/", "/"] {
            assert_eq!(Route::parse(fragment), Route::Filter(Filter::All), "{fragment}");
        }
    }

    #[test]
    fn unrecognized_behaves_as_all_without_selection() {
        let route = Route::parse("#/someday");
        assert_eq!(route, Route::Unrecognized("someday".to_string()));
        assert_eq!(route.filter(), Filter::All);
        assert!(Filter::ALL.iter().all(|f| !route.is_selected(*f)));
        assert_eq!(route.fragment(), "#/someday");
    }

    #[test]
    fn fragments_for_filters() {
        assert_eq!(fragment_for(Filter::All), "#/all");
        assert_eq!(fragment_for(Filter::Active), "#/active");
        assert_eq!(fragment_for(Filter::Completed), "#/completed");
        assert_eq!(Route::parse("completed").fragment(), "#/completed");
    }

    #[test]
    fn selection_follows_filter() {
        let route = Route::parse("#/completed");
        assert!(route.is_selected(Filter::Completed));
        assert!(!route.is_selected(Filter::All));
    }
}
