//! Stat cards for the headline strips
//!
//! Stats load independently of the table; a card shows an em-dash
//! placeholder until its own fetch succeeds.

/// One card of a stats strip.
#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub label: &'static str,
    /// `None` while the stats fetch is pending or failed
    pub value: Option<String>,
    pub trend: Option<f64>,
}

impl StatCard {
    pub fn pending(label: &'static str) -> Self {
        Self {
            label,
            value: None,
            trend: None,
        }
    }

    pub fn ready(label: &'static str, value: String) -> Self {
        Self {
            label,
            value: Some(value),
            trend: None,
        }
    }

    pub fn with_trend(mut self, trend: f64) -> Self {
        self.trend = Some(trend);
        self
    }

    pub fn display_value(&self) -> String {
        self.value.clone().unwrap_or_else(|| "\u{2014}".to_string())
    }

    pub fn display_trend(&self) -> Option<String> {
        self.trend.map(format_trend)
    }
}

/// `+16%`, `-2.1%`. Whole numbers drop the fraction.
pub fn format_trend(trend: f64) -> String {
    let sign = if trend < 0.0 { "-" } else { "+" };
    let magnitude = trend.abs();
    if magnitude.fract() == 0.0 {
        format!("{sign}{}%", magnitude as i64)
    } else {
        format!("{sign}{magnitude}%")
    }
}

/// Thousands-separated count, `5423` renders as `5,423`.
pub fn format_count(count: i64) -> String {
    let digits = count.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if count < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_card_shows_placeholder() {
        let card = StatCard::pending("Total Customers");
        assert_eq!(card.display_value(), "\u{2014}");
        assert_eq!(card.display_trend(), None);
    }

    #[test]
    fn test_trend_formatting() {
        assert_eq!(format_trend(16.0), "+16%");
        assert_eq!(format_trend(-1.0), "-1%");
        assert_eq!(format_trend(-2.1), "-2.1%");
        assert_eq!(format_trend(0.0), "+0%");
    }

    #[test]
    fn test_count_grouping() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(847), "847");
        assert_eq!(format_count(5_423), "5,423");
        assert_eq!(format_count(847_293), "847,293");
        assert_eq!(format_count(-1_200), "-1,200");
    }

    #[test]
    fn test_ready_card_with_trend() {
        let card = StatCard::ready("Members", format_count(1_893)).with_trend(-1.0);
        assert_eq!(card.display_value(), "1,893");
        assert_eq!(card.display_trend().unwrap(), "-1%");
    }
}
