use chrono::Local;
use rand::Rng;

/// Display metadata stamped onto a printed receipt. Generated by the
/// caller at render time; the calculator itself never sees this.
#[derive(Debug, Clone)]
pub struct ReceiptMeta {
    pub bill_no: u32,
    /// Format: "DD/MM/YYYY"
    pub date: String,
    /// Format: "HH:MM AM/PM"
    pub time: String,
}

impl ReceiptMeta {
    pub fn generate() -> Self {
        let now = Local::now();
        Self {
            bill_no: rand::rng().random_range(0..10_000),
            date: now.format("%d/%m/%Y").to_string(),
            time: now.format("%I:%M %p").to_string(),
        }
    }
}
