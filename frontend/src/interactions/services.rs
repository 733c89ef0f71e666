/// Card titles mapped onto the schedule form's service options. Titles must
/// match exactly; several specialty services are booked as a plain wash.
const SERVICE_OPTIONS: [(&str, &str); 6] = [
    ("Wash & Fold", "wash-fold"),
    ("Dry Cleaning", "dry-clean"),
    ("Wash & Iron", "wash-iron"),
    ("Stain Removal", "wash-fold"),
    ("Bedding & Linens", "bedding"),
    ("Shoe Cleaning", "wash-fold"),
];

/// Options offered by the service selector, as (value, label).
pub const SERVICE_CHOICES: [(&str, &str); 4] = [
    ("wash-fold", "Wash & Fold"),
    ("dry-clean", "Dry Cleaning"),
    ("wash-iron", "Wash & Iron"),
    ("bedding", "Bedding & Linens"),
];

pub fn service_option(card_title: &str) -> Option<&'static str> {
    SERVICE_OPTIONS
        .iter()
        .find(|(title, _)| *title == card_title)
        .map(|(_, option)| *option)
}
