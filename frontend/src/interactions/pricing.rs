#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PricingView {
    #[default]
    Individual,
    Subscription,
}

impl PricingView {
    pub fn toggled(self) -> Self {
        match self {
            PricingView::Individual => PricingView::Subscription,
            PricingView::Subscription => PricingView::Individual,
        }
    }

    pub fn is_subscription(self) -> bool {
        self == PricingView::Subscription
    }
}

/// The `data-category` tag carried by each pricing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanCategory {
    Individual,
    Subscription,
}

impl PlanCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            PlanCategory::Individual => "individual",
            PlanCategory::Subscription => "subscription",
        }
    }
}

pub fn is_hidden(view: PricingView, category: PlanCategory) -> bool {
    match view {
        PricingView::Subscription => category == PlanCategory::Individual,
        PricingView::Individual => category == PlanCategory::Subscription,
    }
}
