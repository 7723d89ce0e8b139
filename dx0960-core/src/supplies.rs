//! 多路供电的批量控制
//!
//! 按表顺序上电，逆序断电。

use dx0960_common as dxc;
use dxc::{DeviceResources, HwError, PanelError, PanelResult, Regulator};

struct Supply<R> {
    name: &'static str,
    consumer: R,
}

pub struct RegulatorBulk<R, const N: usize> {
    supplies: heapless::Vec<Supply<R>, N>,
}

impl<R: Regulator, const N: usize> RegulatorBulk<R, N> {
    /// 按顺序获取 `names` 中的每路供电，遇到第一路获取失败即返回
    pub fn get<D>(resources: &mut D, names: &[&'static str; N]) -> PanelResult<Self>
    where
        D: DeviceResources<Regulator = R>,
    {
        let mut supplies = heapless::Vec::new();
        for &name in names {
            let consumer = resources.regulator(name).map_err(|kind| {
                dxc::error!("Couldn't get regulators: {} ({})", name, kind);
                PanelError::RegulatorGet { supply: name, kind }
            })?;
            supplies
                .push(Supply { name, consumer })
                .map_err(|_| PanelError::OutOfMemory)?;
        }
        Ok(Self { supplies })
    }

    /// 按顺序上电，某一路失败时逆序关闭已上电的各路
    pub fn enable(&mut self) -> PanelResult<()> {
        for i in 0..self.supplies.len() {
            let supply = &mut self.supplies[i];
            if let Err(e) = supply.consumer.enable() {
                let err = PanelError::Regulator { supply: supply.name, kind: e.kind() };
                dxc::error!("Failed to enable {}: {}", supply.name, err);

                for rollback in self.supplies[..i].iter_mut().rev() {
                    if let Err(e) = rollback.consumer.disable() {
                        dxc::error!("Failed to roll back {}: {}", rollback.name, e.kind());
                    }
                }
                return Err(err);
            }
            dxc::trace!("supply {} on", supply.name);
        }
        Ok(())
    }

    /// 逆序断电，每一路都会尝试，返回第一个错误
    pub fn disable(&mut self) -> PanelResult<()> {
        let mut first_err = None;
        for supply in self.supplies.iter_mut().rev() {
            match supply.consumer.disable() {
                Ok(()) => dxc::trace!("supply {} off", supply.name),
                Err(e) => {
                    let err = PanelError::Regulator { supply: supply.name, kind: e.kind() };
                    dxc::error!("Failed to disable {}: {}", supply.name, err);
                    first_err.get_or_insert(err);
                }
            }
        }

        match first_err {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    pub fn all_enabled(&self) -> bool {
        self.supplies.iter().all(|s| s.consumer.is_enabled())
    }

    pub fn any_enabled(&self) -> bool {
        self.supplies.iter().any(|s| s.consumer.is_enabled())
    }
}
