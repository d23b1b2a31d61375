use anyhow::Result;

use crate::calc::{self, Analysis, Bill};
use crate::models::{BudgetQuery, Frequency, ReceiptMeta};
use crate::ui::util::parse_amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Menu,
    Receipt,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Menu, Self::Receipt]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Menu => write!(f, "Menu"),
            Self::Receipt => write!(f, "Receipt"),
        }
    }
}

/// Which form field on the menu screen owns the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuField {
    Amount,
    Frequency,
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    // Menu form
    pub(crate) amount_input: String,
    pub(crate) frequency_index: usize,
    pub(crate) focus: MenuField,

    // Last placed order
    pub(crate) query: Option<BudgetQuery>,
    pub(crate) analysis: Option<Analysis>,
    pub(crate) bill: Option<Bill>,
    pub(crate) receipt_meta: Option<ReceiptMeta>,
}

impl App {
    pub(crate) fn new() -> Self {
        Self {
            running: true,
            screen: Screen::Menu,
            status_message: String::new(),
            show_help: false,

            amount_input: String::new(),
            frequency_index: 0,
            focus: MenuField::Amount,

            query: None,
            analysis: None,
            bill: None,
            receipt_meta: None,
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    pub(crate) fn frequency(&self) -> Frequency {
        Frequency::all()
            .get(self.frequency_index)
            .copied()
            .unwrap_or(Frequency::Single)
    }

    pub(crate) fn cycle_frequency(&mut self, delta: i32) {
        let len = Frequency::all().len();
        self.frequency_index = if delta >= 0 {
            (self.frequency_index + 1) % len
        } else if self.frequency_index == 0 {
            len - 1
        } else {
            self.frequency_index - 1
        };
    }

    /// Run both calculator paths for the current form values and move to
    /// the receipt screen.
    pub(crate) fn place_order(&mut self) -> Result<()> {
        if self.amount_input.trim().is_empty() {
            self.set_status("Enter an amount first!");
            return Ok(());
        }

        let amount = parse_amount(&self.amount_input);
        let query = BudgetQuery::new(amount, self.frequency());

        self.analysis = Some(calc::analyze(&query)?);
        self.bill = Some(calc::itemized_bill(&query)?);
        self.receipt_meta = Some(ReceiptMeta::generate());
        self.query = Some(query);

        self.screen = Screen::Receipt;
        self.set_status("Order placed");
        Ok(())
    }

    /// Return to the menu, keeping the form as typed.
    pub(crate) fn back_to_menu(&mut self) {
        self.screen = Screen::Menu;
        self.status_message.clear();
    }

    /// Return to the menu with a blank form for the next customer.
    pub(crate) fn new_order(&mut self) {
        self.amount_input.clear();
        self.frequency_index = 0;
        self.focus = MenuField::Amount;
        self.query = None;
        self.analysis = None;
        self.bill = None;
        self.receipt_meta = None;
        self.screen = Screen::Menu;
        self.set_status("Ready for the next order");
    }
}
