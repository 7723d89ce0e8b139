use enumset::{EnumSet, EnumSetType};

/// DSI 链路模式标志（`MIPI_DSI_MODE_*` 的子集）
#[derive(EnumSetType, Debug)]
pub enum DsiModeFlag {
    Video,
    VideoBurst,
    VideoSyncPulse,
    VideoNoHfp,
    VideoNoHbp,
    VideoNoHsa,
    NoEotPacket,
    ClockNonContinuous,
    LowPower,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PixelFormat {
    Rgb888,
    Rgb666,
    Rgb666Packed,
    Rgb565,
}

impl PixelFormat {
    pub const fn bits_per_pixel(self) -> u8 {
        match self {
            PixelFormat::Rgb888 | PixelFormat::Rgb666 => 24,
            PixelFormat::Rgb666Packed => 18,
            PixelFormat::Rgb565 => 16,
        }
    }
}

/// attach 时交给 DSI 主机的链路参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DsiConfig {
    pub mode_flags: EnumSet<DsiModeFlag>,
    pub format: PixelFormat,
    pub lanes: u8,
}

impl DsiConfig {
    pub fn is_video_mode(&self) -> bool {
        self.mode_flags.contains(DsiModeFlag::Video)
    }
}
