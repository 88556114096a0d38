mod study_vm;
mod wheel_vm;

pub use study_vm::{
    CategoryItemVm, EMPTY_POOL_MESSAGE, MissedItemVm, REVEAL_HINT, StudyCardVm, StudyIntent,
    StudyVm, start_study,
};
pub use wheel_vm::{HUB_RADIUS, SectorSvgVm, WheelSvgVm, map_wheel_svg, rotation_transform};
