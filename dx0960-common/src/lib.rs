#![cfg_attr(not(test), no_std)]
#![allow(async_fn_in_trait)]

//! DX0960BE40A1 面板驱动的公共定义
//!
//! 错误类型、显示模式、DSI 配置、硬件抽象 trait 以及宿主侧的面板封装，
//! 供驱动本体（dx0960-core）和模拟宿主共用。

pub mod host;
pub mod traits;
pub mod types;

cfg_if::cfg_if! {
    if #[cfg(feature = "log")] {
        pub use log::{trace, debug, info, warn, error};
    }
    else if #[cfg(feature = "defmt")] {
        pub use defmt::{trace, debug, info, warn, error};
    }
    else {
        #[macro_export]
        macro_rules! trace {
            ($($arg:tt)*) => {{}};
        }
        #[macro_export]
        macro_rules! debug {
            ($($arg:tt)*) => {{}};
        }
        #[macro_export]
        macro_rules! info {
            ($($arg:tt)*) => {{}};
        }
        #[macro_export]
        macro_rules! warn {
            ($($arg:tt)*) => {{}};
        }
        #[macro_export]
        macro_rules! error {
            ($($arg:tt)*) => {{}};
        }
    }
}

pub use host::*;
pub use traits::*;
pub use types::*;
