//! 显示模式描述
//!
//! 字段含义与 DRM 的 `drm_display_mode` 一致，时钟单位为 kHz。

use core::fmt::Write as _;

use enumset::{EnumSet, EnumSetType};

/// `drm_display_mode` 名称的最大长度
pub const DISPLAY_MODE_LEN: usize = 32;

#[derive(EnumSetType, Debug)]
pub enum ModeType {
    Builtin,
    Preferred,
    UserDef,
    Driver,
}

#[derive(EnumSetType, Debug)]
pub enum ModeFlag {
    PHSync,
    NHSync,
    PVSync,
    NVSync,
    Interlace,
    DblScan,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayMode {
    pub name: heapless::String<DISPLAY_MODE_LEN>,
    pub clock: u32,

    pub hdisplay: u16,
    pub hsync_start: u16,
    pub hsync_end: u16,
    pub htotal: u16,

    pub vdisplay: u16,
    pub vsync_start: u16,
    pub vsync_end: u16,
    pub vtotal: u16,

    pub flags: EnumSet<ModeFlag>,
    pub mode_type: EnumSet<ModeType>,
    pub width_mm: u16,
    pub height_mm: u16,
}

impl DisplayMode {
    /// 场频（Hz），四舍五入取整
    pub fn vrefresh(&self) -> u32 {
        if self.htotal == 0 || self.vtotal == 0 {
            return 0;
        }

        let mut num = u64::from(self.clock) * 1000;
        let mut den = u64::from(self.htotal) * u64::from(self.vtotal);
        if self.flags.contains(ModeFlag::Interlace) {
            num *= 2;
        }
        if self.flags.contains(ModeFlag::DblScan) {
            den *= 2;
        }

        u32::try_from((num + den / 2) / den).unwrap_or(u32::MAX)
    }

    /// 按 `<hdisplay>x<vdisplay>[i]` 生成模式名
    pub fn set_name(&mut self) {
        let interlaced = self.flags.contains(ModeFlag::Interlace);
        self.name.clear();
        // 最长 "65535x65535i"，不会超出容量
        let _ = write!(
            self.name,
            "{}x{}{}",
            self.hdisplay,
            self.vdisplay,
            if interlaced { "i" } else { "" }
        );
    }

    pub fn is_preferred(&self) -> bool {
        self.mode_type.contains(ModeType::Preferred)
    }

    pub fn hsync_len(&self) -> u16 {
        self.hsync_end.saturating_sub(self.hsync_start)
    }

    pub fn vsync_len(&self) -> u16 {
        self.vsync_end.saturating_sub(self.vsync_start)
    }
}
