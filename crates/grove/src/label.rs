use crate::config::{LABEL_GLYPH_WIDTH, LABEL_HEIGHT, LABEL_PADDING};

/// Width of a frond label's background pill, in screen points.
///
/// Counts characters rather than bytes so accented names ("Gabès") are not
/// drawn wider than their ASCII neighbours.
pub fn label_width(name: &str) -> f32 {
    name.chars().count() as f32 * LABEL_GLYPH_WIDTH + 2.0 * LABEL_PADDING
}

pub fn label_size(name: &str) -> (f32, f32) {
    (label_width(name), LABEL_HEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::city::default_cities;

    #[test]
    fn test_width_monotone_in_length() {
        let mut cities = default_cities();
        cities.sort_by_key(|c| c.name.chars().count());
        for pair in cities.windows(2) {
            let (a, b) = (&pair[0].name, &pair[1].name);
            if a.chars().count() < b.chars().count() {
                assert!(label_width(a) < label_width(b), "{a} vs {b}");
            } else {
                assert_eq!(label_width(a), label_width(b), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        assert_eq!(label_width("Gabès"), label_width("Gabes"));
    }

    #[test]
    fn test_empty_name_is_just_padding() {
        assert_eq!(label_width(""), 2.0 * LABEL_PADDING);
        assert_eq!(label_size("").1, LABEL_HEIGHT);
    }
}
