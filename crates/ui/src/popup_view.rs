//! What the city popup shows, computed without touching egui.

use grove::city::{CityRecord, Rgb8};
use grove::selection::Selection;

#[derive(Debug, Clone, PartialEq)]
pub struct PopupView {
    pub title: String,
    pub color: Rgb8,
    /// Order progress in `[0, 1]`.
    pub progress: f32,
    pub percent_text: String,
    pub caption: String,
    /// "Date Details" rows, present only when a date was clicked.
    pub date_details: Option<Vec<(String, String)>>,
    /// "City Stats" rows, present only when the record carries stats.
    pub stats: Option<Vec<(String, String)>>,
}

pub fn format_percent(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}%")
    } else {
        format!("{value:.1}%")
    }
}

impl PopupView {
    pub fn new(selection: Selection, city: &CityRecord) -> Self {
        let percent_text = format_percent(city.purchased);
        let caption = format!("{percent_text} of dates ordered from {}", city.name);

        let date_details = selection.date.map(|date| {
            vec![
                ("Date Number".to_string(), format!("#{}", date + 1)),
                ("City".to_string(), city.name.clone()),
                ("Branch".to_string(), format!("#{}", selection.city + 1)),
                ("Status".to_string(), "Available".to_string()),
            ]
        });

        let stats = city.stats.map(|s| {
            vec![
                ("Growth Rate".to_string(), format!("{:+.1}%", s.growth_rate)),
                ("Orders".to_string(), s.orders.to_string()),
                ("Quality".to_string(), format!("{:.1} / 5", s.quality)),
            ]
        });

        Self {
            title: city.name.clone(),
            color: city.color,
            progress: (city.purchased / 100.0).clamp(0.0, 1.0),
            percent_text,
            caption,
            date_details,
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grove::city::{default_cities, CityStats};

    fn mahdia() -> CityRecord {
        default_cities()
            .into_iter()
            .find(|c| c.name == "Mahdia")
            .unwrap()
    }

    #[test]
    fn test_date_selection_has_details() {
        let view = PopupView::new(
            Selection {
                city: 5,
                date: Some(3),
            },
            &mahdia(),
        );
        let rows = view.date_details.unwrap();
        assert_eq!(rows[0], ("Date Number".to_string(), "#4".to_string()));
        assert_eq!(rows[1].1, "Mahdia");
        assert_eq!(rows[2].1, "#6");
        assert_eq!(rows[3].1, "Available");
    }

    #[test]
    fn test_city_selection_has_no_details() {
        let view = PopupView::new(Selection { city: 5, date: None }, &mahdia());
        assert!(view.date_details.is_none());
        assert_eq!(view.title, "Mahdia");
    }

    #[test]
    fn test_caption_and_progress() {
        let view = PopupView::new(Selection { city: 0, date: None }, &mahdia());
        assert_eq!(view.caption, "10% of dates ordered from Mahdia");
        assert!((view.progress - 0.10).abs() < 1e-6);
    }

    #[test]
    fn test_fractional_percent() {
        assert_eq!(format_percent(42.5), "42.5%");
        assert_eq!(format_percent(0.0), "0%");
    }

    #[test]
    fn test_stats_rows_follow_record() {
        let city = CityRecord::new("Oasis", 30.0, Rgb8::new(1, 2, 3)).with_stats(CityStats {
            growth_rate: 12.0,
            orders: 340,
            quality: 4.5,
        });
        let view = PopupView::new(Selection { city: 0, date: None }, &city);
        let stats = view.stats.unwrap();
        assert_eq!(stats[0].1, "+12.0%");
        assert_eq!(stats[1].1, "340");
        assert_eq!(stats[2].1, "4.5 / 5");
    }
}
