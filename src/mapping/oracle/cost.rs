use crate::config::TravelCostType;
use crate::network::Link;

/// Converts a link into its travel cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct LinkCosting {
    cost_type: TravelCostType,
}

impl LinkCosting {
    pub fn new(cost_type: TravelCostType) -> Self {
        Self { cost_type }
    }

    pub fn cost_type(&self) -> TravelCostType {
        self.cost_type
    }

    #[inline]
    pub fn link_cost(&self, link: &Link) -> f64 {
        match self.cost_type {
            TravelCostType::TravelTime => link.travel_time(),
            TravelCostType::LinkLength => link.length,
        }
    }
}
