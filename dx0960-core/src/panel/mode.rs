use dx0960_common::{DisplayMode, ModeType};
use enumset::{EnumSet, enum_set};

const HDISPLAY: u16 = 1024;
const HFP: u16 = 250;
const HSYNC: u16 = 10;
const HBP: u16 = 60;

const VDISPLAY: u16 = 600;
const VFP: u16 = 12;
const VSYNC: u16 = 1;
const VBP: u16 = 22;

pub const MODE_TYPE: EnumSet<ModeType> = enum_set!(ModeType::Driver | ModeType::Preferred);

/// 面板唯一支持的视频模式，1024x600 约 100 Hz
pub const DEFAULT_MODE: DisplayMode = DisplayMode {
    name: heapless::String::new(),
    clock: 85_000,

    hdisplay: HDISPLAY,
    hsync_start: HDISPLAY + HFP,
    hsync_end: HDISPLAY + HFP + HSYNC,
    htotal: HDISPLAY + HFP + HSYNC + HBP,

    vdisplay: VDISPLAY,
    vsync_start: VDISPLAY + VFP,
    vsync_end: VDISPLAY + VFP + VSYNC,
    vtotal: VDISPLAY + VFP + VSYNC + VBP,

    flags: EnumSet::empty(),
    mode_type: MODE_TYPE,
    width_mm: 196,
    height_mm: 114,
};
