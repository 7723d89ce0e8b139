#![cfg_attr(not(test), no_std)]
#![allow(async_fn_in_trait)]

//! DX0960BE40A1 1024x600 MIPI-DSI LCD 面板驱动
//!
//! 上电时序、固定的 DCS 初始化命令和唯一的显示模式。

pub mod panel;
pub mod reset;
pub mod supplies;

pub use panel::*;
pub use reset::ResetLine;
pub use supplies::RegulatorBulk;
