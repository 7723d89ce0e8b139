use core::convert::Infallible;

use thiserror::Error;

pub type PanelResult<T> = core::result::Result<T, PanelError>;

/// 底层硬件错误分类，对应内核的负 errno
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorKind {
    #[error("I/O error")]
    Io,
    #[error("no such device")]
    NoDevice,
    #[error("probe deferred")]
    ProbeDefer,
    #[error("device busy")]
    Busy,
    #[error("invalid argument")]
    InvalidArgument,
    #[error("timed out")]
    TimedOut,
    #[error("out of memory")]
    OutOfMemory,
    #[error("operation not supported")]
    NotSupported,
    #[error("unknown error")]
    Other,
}

impl ErrorKind {
    /// 对应的 Linux 错误码，总是负数
    pub const fn errno(self) -> i32 {
        match self {
            ErrorKind::Io | ErrorKind::Other => -5,
            ErrorKind::NoDevice => -19,
            ErrorKind::ProbeDefer => -517,
            ErrorKind::Busy => -16,
            ErrorKind::InvalidArgument => -22,
            ErrorKind::TimedOut => -110,
            ErrorKind::OutOfMemory => -12,
            ErrorKind::NotSupported => -95,
        }
    }
}

/// 所有硬件抽象错误类型都需要能归类为 [`ErrorKind`]
pub trait HwError: core::fmt::Debug {
    fn kind(&self) -> ErrorKind;
}

impl HwError for ErrorKind {
    fn kind(&self) -> ErrorKind {
        *self
    }
}

impl HwError for Infallible {
    fn kind(&self) -> ErrorKind {
        match *self {}
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelError {
    #[error("couldn't get regulator {supply}: {kind}")]
    RegulatorGet { supply: &'static str, kind: ErrorKind },

    #[error("regulator {supply} failed: {kind}")]
    Regulator { supply: &'static str, kind: ErrorKind },

    #[error("couldn't get {con_id} GPIO: {kind}")]
    GpioGet { con_id: &'static str, kind: ErrorKind },

    #[error("reset GPIO write failed: {0}")]
    Gpio(ErrorKind),

    #[error("DCS write of {cmd:#04x} failed: {kind}")]
    Dcs { cmd: u8, kind: ErrorKind },

    #[error("DSI attach failed: {0}")]
    Attach(ErrorKind),

    #[error("backlight error: {0}")]
    Backlight(ErrorKind),

    #[error("panel is not prepared")]
    NotPrepared,

    #[error("no driver matches the device")]
    NoMatch,

    #[error("out of memory")]
    OutOfMemory,
}

impl PanelError {
    pub fn kind(&self) -> ErrorKind {
        match *self {
            PanelError::RegulatorGet { kind, .. }
            | PanelError::Regulator { kind, .. }
            | PanelError::GpioGet { kind, .. }
            | PanelError::Dcs { kind, .. } => kind,
            PanelError::Gpio(kind) | PanelError::Attach(kind) | PanelError::Backlight(kind) => {
                kind
            }
            PanelError::NotPrepared => ErrorKind::InvalidArgument,
            PanelError::NoMatch => ErrorKind::NoDevice,
            PanelError::OutOfMemory => ErrorKind::OutOfMemory,
        }
    }

    pub fn errno(&self) -> i32 {
        self.kind().errno()
    }
}

/// `embedded-hal` 引脚错误只带粗粒度分类，在此映射为 [`ErrorKind`]
pub fn digital_error_kind<E: embedded_hal::digital::Error>(err: &E) -> ErrorKind {
    match err.kind() {
        embedded_hal::digital::ErrorKind::Other => ErrorKind::Io,
        _ => ErrorKind::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errno_values_match_linux() {
        assert_eq!(ErrorKind::Io.errno(), -5);
        assert_eq!(ErrorKind::NoDevice.errno(), -19);
        assert_eq!(ErrorKind::OutOfMemory.errno(), -12);
        assert_eq!(ErrorKind::ProbeDefer.errno(), -517);
        assert_eq!(ErrorKind::TimedOut.errno(), -110);
    }

    #[test]
    fn panel_error_carries_underlying_kind() {
        let err = PanelError::Dcs { cmd: 0x29, kind: ErrorKind::TimedOut };
        assert_eq!(err.kind(), ErrorKind::TimedOut);
        assert_eq!(err.errno(), -110);
        assert_eq!(PanelError::NoMatch.errno(), -19);
        assert_eq!(PanelError::OutOfMemory.errno(), -12);
        assert_eq!(PanelError::NotPrepared.errno(), -22);
    }

    #[test]
    fn dcs_error_message_names_the_command() {
        let err = PanelError::Dcs { cmd: 0x11, kind: ErrorKind::Io };
        assert_eq!(err.to_string(), "DCS write of 0x11 failed: I/O error");
    }
}
