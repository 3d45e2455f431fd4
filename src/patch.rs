/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! Firmware patch loading

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::blocking::i2c::{Write, WriteRead};
use log::{error, info};

use crate::registers::{reg, var, HostCommand};
use crate::Mt9m114;

/// A firmware patch and where it goes
#[derive(Debug, Clone, Copy)]
pub struct PatchDescriptor<'a> {
    pub description: &'a str,
    /// Base of the physical memory window the payload is written through
    pub physical_address: u16,
    /// Address the payload burst starts at, inside the window
    pub patch_write_address: u16,
    /// Entry point handed to the patch loader
    pub patch_loader_address: u16,
    pub patch_id: u16,
    pub firmware_id: u32,
    pub payload: &'a [u16],
}

impl<I2C, D, CommE> Mt9m114<I2C, D>
where
    I2C: Write<Error = CommE> + WriteRead<Error = CommE>,
    D: DelayMs<u32>,
{
    /// Load `patch` into sensor RAM and activate it.
    /// A failure at any step leaves the firmware in an unknown state: the
    /// session refuses further work until `reset` succeeds.
    pub fn apply_patch(
        &mut self,
        patch: &PatchDescriptor,
    ) -> Result<(), crate::Error<CommE>> {
        self.session()?;
        match self.load_patch(patch) {
            Ok(()) => {
                info!(
                    "applying patch {} \"{}\" succeeded",
                    patch.patch_id, patch.description
                );
                Ok(())
            }
            Err(e) => {
                error!(
                    "applying patch {} \"{}\" failed",
                    patch.patch_id, patch.description
                );
                self.indeterminate = true;
                Err(e)
            }
        }
    }

    fn load_patch(
        &mut self,
        patch: &PatchDescriptor,
    ) -> Result<(), crate::Error<CommE>> {
        // physical addressing mode
        self.write_u16(reg::ACCESS_CTL_STAT, 0x0001)?;
        self.write_u16(reg::PHYSICAL_ADDRESS_ACCESS, patch.physical_address)?;
        self.burst_write(patch.patch_write_address, patch.payload)?;
        self.write_u16(reg::LOGICAL_ADDRESS_ACCESS, 0x0000)?;

        self.write_u16(var::PATCHLDR_LOADER_ADDRESS, patch.patch_loader_address)?;
        self.write_u16(var::PATCHLDR_PATCH_ID, patch.patch_id)?;
        self.write_u32(var::PATCHLDR_FIRMWARE_ID, patch.firmware_id)?;
        self.issue_command(HostCommand::ApplyPatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;
    use crate::{CommandFailure, Control, Error};
    use embedded_hal_mock::i2c::Transaction;
    use embedded_hal_mock::MockError;
    use std::io::ErrorKind;

    const PAYLOAD: [u16; 3] = [0x70CF, 0xFFFF, 0xC5D4];

    const PATCH: PatchDescriptor<'static> = PatchDescriptor {
        description: "test patch",
        physical_address: 0x5000,
        patch_write_address: 0xD000,
        patch_loader_address: 0x010C,
        patch_id: 0x0202,
        firmware_id: 0x4103_0202,
        payload: &PAYLOAD,
    };

    fn staging() -> Vec<Transaction> {
        vec![
            write16(reg::ACCESS_CTL_STAT, 0x0001),
            write16(reg::PHYSICAL_ADDRESS_ACCESS, 0x5000),
            Transaction::write(ADDR, vec![0xD0, 0x00, 0x70, 0xCF, 0xFF, 0xFF, 0xC5, 0xD4]),
            write16(reg::LOGICAL_ADDRESS_ACCESS, 0x0000),
            write16(var::PATCHLDR_LOADER_ADDRESS, 0x010C),
            write16(var::PATCHLDR_PATCH_ID, 0x0202),
            write32(var::PATCHLDR_FIRMWARE_ID, 0x4103_0202),
        ]
    }

    #[test]
    fn patch_is_staged_then_applied() {
        let mut expectations = staging();
        expectations.extend(command_ok(HostCommand::ApplyPatch));
        let mut drv = session_driver(&expectations, false);
        drv.apply_patch(&PATCH).unwrap();
        assert!(!drv.indeterminate);
        finish(drv);
    }

    #[test]
    fn rejected_patch_poisons_session() {
        let mut expectations = staging();
        expectations.extend(vec![
            read16(reg::COMMAND_REGISTER, 0x0000),
            write16(reg::COMMAND_REGISTER, 0x8001),
            read16(reg::COMMAND_REGISTER, 0x0000),
            read16(reg::COMMAND_REGISTER, 0x0000),
            read8(var::PATCHLDR_APPLY_STATUS, 0x05),
        ]);
        let mut drv = session_driver(&expectations, false);
        let err = drv.apply_patch(&PATCH).unwrap_err();
        assert_eq!(
            err,
            Error::CommandFailed {
                command: HostCommand::ApplyPatch,
                reason: CommandFailure::BadFirmwareFormat,
            }
        );
        assert_eq!(
            drv.get_control(Control::Brightness),
            Err(Error::FirmwareIndeterminate)
        );
        assert!(drv.get_control(Control::Brightness).unwrap_err().is_fatal());
        finish(drv);
    }

    #[test]
    fn bus_failure_aborts_before_activation() {
        let expectations = [
            write16(reg::ACCESS_CTL_STAT, 0x0001),
            write16(reg::PHYSICAL_ADDRESS_ACCESS, 0x5000)
                .with_error(MockError::Io(ErrorKind::Other)),
        ];
        let mut drv = session_driver(&expectations, false);
        assert!(matches!(drv.apply_patch(&PATCH), Err(Error::Comm(_))));
        assert!(drv.indeterminate);
        finish(drv);
    }
}
