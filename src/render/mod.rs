pub(crate) mod composite;
pub(crate) mod mask;
pub(crate) mod resample;
pub(crate) mod sizing;
