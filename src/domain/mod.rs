// Domain layer - Pollen observations, catalog and selection cascade
pub mod catalog;
pub mod chart;
pub mod observation;
pub mod plant;
pub mod selection;
