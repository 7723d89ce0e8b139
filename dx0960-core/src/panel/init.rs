//! 上电初始化命令表

use dx0960_common::DcsCommand;

pub const INIT_CMD_LEN: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitCmd {
    pub data: [u8; INIT_CMD_LEN],
}

impl InitCmd {
    const fn dcs(cmd: DcsCommand) -> Self {
        Self { data: [cmd.opcode()] }
    }
}

/// 在 prepare 阶段按顺序原样发送，每条之后等待 [`super::timing::INIT_CMD_DELAY_MS`]
pub static INIT_CMDS: [InitCmd; 2] = [
    InitCmd::dcs(DcsCommand::ExitSleepMode),
    InitCmd::dcs(DcsCommand::SetDisplayOn),
];
