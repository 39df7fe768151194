//! Process-wide Lebedev-26 context
//!
//! Grid, group, function action and integrator are immutable once built.
//! `Lebedev26::shared` builds them on first use and hands out shared
//! ownership afterwards.

use std::sync::{Arc, OnceLock};

use tracing::debug;

use super::action::GridAction;
use super::grid::LebedevGrid;
use super::quadrature::LebedevIntegrator;
use crate::error::Result;
use crate::group::RotationGroup;

/// Everything the 3D distance needs about the 26-point grid
#[derive(Debug, Clone)]
pub struct Lebedev26 {
    pub group: RotationGroup,
    pub action: GridAction,
    pub integrator: LebedevIntegrator,
}

static SHARED: OnceLock<Result<Arc<Lebedev26>>> = OnceLock::new();

impl Lebedev26 {
    /// Build a private instance
    pub fn build() -> Result<Self> {
        let group = RotationGroup::new();
        let action = GridAction::new(LebedevGrid::lebedev_26(), &group)?;
        let integrator = LebedevIntegrator::new();

        debug!(
            points = action.grid().len(),
            group_order = group.order(),
            "built Lebedev-26 context"
        );

        Ok(Self { group, action, integrator })
    }

    /// Shared instance, built once per process
    pub fn shared() -> Result<Arc<Self>> {
        SHARED.get_or_init(|| Self::build().map(Arc::new)).clone()
    }

    pub fn grid(&self) -> &LebedevGrid {
        self.action.grid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_is_built_once() {
        let a = Lebedev26::shared().unwrap();
        let b = Lebedev26::shared().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.grid().len(), 26);
        assert_eq!(a.group.order(), 24);
    }
}
