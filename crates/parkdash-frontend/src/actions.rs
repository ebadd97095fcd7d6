//! Dashboard action cards and their navigation targets.

/// One of the quick-action cards rendered on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCard {
    NewBooking,
    MyBookings,
    ViewSlots,
    GetHelp,
    Feedback,
    Profile,
    Payments,
}

impl ActionCard {
    /// Parses the card's `data-action` attribute value.
    pub fn from_data_attribute(value: &str) -> Option<Self> {
        match value {
            "new-booking" => Some(Self::NewBooking),
            "my-bookings" => Some(Self::MyBookings),
            "view-slots" => Some(Self::ViewSlots),
            "get-help" => Some(Self::GetHelp),
            "feedback" => Some(Self::Feedback),
            "profile" => Some(Self::Profile),
            "payments" => Some(Self::Payments),
            _ => None,
        }
    }

    /// The page this card navigates to.
    pub fn route(self) -> &'static str {
        match self {
            Self::NewBooking => "/customer/booking/new",
            Self::MyBookings => "/customer/bookings",
            Self::ViewSlots => "/customer/slots",
            Self::GetHelp => "/customer/support/help",
            Self::Feedback => "/customer/feedback",
            Self::Profile => "/customer/profile",
            Self::Payments => "/customer/payments",
        }
    }
}

/// Resolves a clicked card's data attribute to its navigation route.
/// Unknown actions are logged and navigate nowhere.
pub fn resolve_action(value: &str) -> Option<&'static str> {
    match ActionCard::from_data_attribute(value) {
        Some(card) => Some(card.route()),
        None => {
            log::warn!("Unknown action: {value}");
            None
        }
    }
}
