use serde::{Deserialize, Serialize};

use crate::icon::IconId;

/// One chart row. Identity is a small numeric id (`max + 1` on
/// insert) so the inline editor forms can address rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeriesPoint {
    pub id: u32,
    pub label: String,
    pub value: f64,
    pub color: Option<String>,
}

impl SeriesPoint {
    pub fn new(id: u32, label: impl Into<String>, value: f64) -> Self {
        Self {
            id,
            label: label.into(),
            value,
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// An editable chart series with the shared inline-form contract:
/// add assigns a fresh id, edit replaces by id, delete removes by
/// id, and absent ids are no-ops.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    points: Vec<SeriesPoint>,
}

impl Series {
    pub fn new(points: Vec<SeriesPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn point(&self, id: u32) -> Option<&SeriesPoint> {
        self.points.iter().find(|point| point.id == id)
    }

    pub fn next_id(&self) -> u32 {
        self.points.iter().map(|point| point.id).max().unwrap_or(0) + 1
    }

    pub fn add(&mut self, label: impl Into<String>, value: f64, color: Option<String>) -> u32 {
        let id = self.next_id();
        self.points.push(SeriesPoint {
            id,
            label: label.into(),
            value,
            color,
        });
        id
    }

    pub fn update(&mut self, point: SeriesPoint) -> bool {
        match self.points.iter_mut().find(|have| have.id == point.id) {
            Some(slot) => {
                *slot = point;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.points.len();
        self.points.retain(|point| point.id != id);
        self.points.len() != before
    }

    pub fn total(&self) -> f64 {
        self.points.iter().map(|point| point.value).sum()
    }

    pub fn mean(&self) -> f64 {
        if self.points.is_empty() {
            0.0
        } else {
            self.total() / self.points.len() as f64
        }
    }

    /// Largest value in the series, for chart y-scaling.
    pub fn max_value(&self) -> f64 {
        self.points
            .iter()
            .map(|point| point.value)
            .fold(0.0, f64::max)
    }

    /// Fraction of the series total held by one point, in [0, 1].
    pub fn share(&self, id: u32) -> f64 {
        let total = self.total();
        if total <= 0.0 {
            return 0.0;
        }
        self.point(id)
            .map(|point| point.value / total)
            .unwrap_or(0.0)
    }
}

/// One row of the analytics performance chart (three stacked
/// measures per label).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PerfRow {
    pub id: u32,
    pub label: String,
    pub sales: f64,
    pub users: f64,
    pub revenue: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PerfTable {
    rows: Vec<PerfRow>,
}

impl PerfTable {
    pub fn new(rows: Vec<PerfRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[PerfRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn next_id(&self) -> u32 {
        self.rows.iter().map(|row| row.id).max().unwrap_or(0) + 1
    }

    pub fn add(&mut self, label: impl Into<String>, sales: f64, users: f64, revenue: f64) -> u32 {
        let id = self.next_id();
        self.rows.push(PerfRow {
            id,
            label: label.into(),
            sales,
            users,
            revenue,
        });
        id
    }

    pub fn update(&mut self, row: PerfRow) -> bool {
        match self.rows.iter_mut().find(|have| have.id == row.id) {
            Some(slot) => {
                *slot = row;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.id != id);
        self.rows.len() != before
    }

    pub fn total_sales(&self) -> f64 {
        self.rows.iter().map(|row| row.sales).sum()
    }

    pub fn total_users(&self) -> f64 {
        self.rows.iter().map(|row| row.users).sum()
    }

    pub fn total_revenue(&self) -> f64 {
        self.rows.iter().map(|row| row.revenue).sum()
    }

    /// Average sales per row; zero for an empty table.
    pub fn avg_order_value(&self) -> f64 {
        if self.rows.is_empty() {
            0.0
        } else {
            self.total_sales() / self.rows.len() as f64
        }
    }

    pub fn max_measure(&self) -> f64 {
        self.rows
            .iter()
            .flat_map(|row| [row.sales, row.users, row.revenue])
            .fold(0.0, f64::max)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn as_key(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "up" => Some(Self::Up),
            "down" => Some(Self::Down),
            _ => None,
        }
    }
}

/// A dashboard stat card. `value` and `change` stay free-form
/// strings ("$45,231", "+12.5%"), as entered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricCard {
    pub id: u32,
    pub title: String,
    pub value: String,
    pub change: String,
    pub trend: Trend,
    pub icon: IconId,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricDeck {
    cards: Vec<MetricCard>,
}

impl MetricDeck {
    pub fn new(cards: Vec<MetricCard>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[MetricCard] {
        &self.cards
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn next_id(&self) -> u32 {
        self.cards.iter().map(|card| card.id).max().unwrap_or(0) + 1
    }

    pub fn add(&mut self, card: MetricCard) {
        self.cards.push(card);
    }

    pub fn update(&mut self, card: MetricCard) -> bool {
        match self.cards.iter_mut().find(|have| have.id == card.id) {
            Some(slot) => {
                *slot = card;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.cards.len();
        self.cards.retain(|card| card.id != id);
        self.cards.len() != before
    }
}

/// Numeric form fields fall back to zero on unparsable input.
pub fn parse_value(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Series {
        Series::new(vec![
            SeriesPoint::new(1, "Jan", 4000.0),
            SeriesPoint::new(2, "Feb", 3000.0),
            SeriesPoint::new(3, "Mar", 5000.0),
        ])
    }

    #[test]
    fn add_assigns_max_plus_one() {
        let mut series = sample();
        series.remove(2);
        let id = series.add("Apr", 2780.0, None);
        assert_eq!(id, 4);

        let empty = Series::default();
        assert_eq!(empty.next_id(), 1);
    }

    #[test]
    fn update_replaces_by_id_and_ignores_unknown() {
        let mut series = sample();
        assert!(series.update(SeriesPoint::new(2, "Feb", 3500.0)));
        assert_eq!(series.point(2).map(|p| p.value), Some(3500.0));

        assert!(!series.update(SeriesPoint::new(99, "Zzz", 1.0)));
        assert_eq!(series.len(), 3);
    }

    #[test]
    fn remove_by_id_and_unknown_id() {
        let mut series = sample();
        assert!(series.remove(1));
        assert_eq!(series.len(), 2);
        assert!(series.point(1).is_none());

        assert!(!series.remove(1));
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn aggregates_recompute_from_points() {
        let mut series = sample();
        assert_eq!(series.total(), 12000.0);
        assert_eq!(series.mean(), 4000.0);
        assert_eq!(series.max_value(), 5000.0);
        assert!((series.share(3) - 5.0 / 12.0).abs() < 1e-9);

        series.remove(3);
        assert_eq!(series.total(), 7000.0);

        let empty = Series::default();
        assert_eq!(empty.mean(), 0.0);
        assert_eq!(empty.share(1), 0.0);
    }

    #[test]
    fn perf_table_aggregates() {
        let mut table = PerfTable::default();
        assert_eq!(table.avg_order_value(), 0.0);

        table.add("Jan", 4000.0, 2400.0, 2400.0);
        table.add("Feb", 3000.0, 1398.0, 2210.0);
        assert_eq!(table.total_sales(), 7000.0);
        assert_eq!(table.total_users(), 3798.0);
        assert_eq!(table.avg_order_value(), 3500.0);
        assert_eq!(table.max_measure(), 4000.0);
    }

    #[test]
    fn parse_value_defaults_to_zero() {
        assert_eq!(parse_value("42.5"), 42.5);
        assert_eq!(parse_value(" 7 "), 7.0);
        assert_eq!(parse_value("not a number"), 0.0);
        assert_eq!(parse_value(""), 0.0);
    }
}
