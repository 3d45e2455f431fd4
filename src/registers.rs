/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! Register and firmware variable map of the MT9M114.
//!
//! Hardware registers and firmware variables share one 16-bit address space.
//! Variables live at 0x8000 and above and are reached through the logical
//! access window of the XDMA block.

use bitflags::bitflags;

/// Expected contents of `reg::CHIP_ID`
pub const MT9M114_CHIP_ID: u16 = 0x2481;

/// Set by the host when issuing a host command, re-set by firmware on success
pub const HOST_COMMAND_OK: u16 = 0x8000;

/// Sensor core, SYSCTL and XDMA registers
pub mod reg {
    pub const CHIP_ID: u16 = 0x0000;
    pub const RESET_AND_MISC_CONTROL: u16 = 0x001A;
    pub const PAD_SLEW: u16 = 0x001E;
    pub const COMMAND_REGISTER: u16 = 0x0080;
    pub const ACCESS_CTL_STAT: u16 = 0x0982;
    pub const PHYSICAL_ADDRESS_ACCESS: u16 = 0x098A;
    pub const LOGICAL_ADDRESS_ACCESS: u16 = 0x098E;

    // lens shading correction
    pub const P_G1_P0Q0: u16 = 0x3640;
    pub const P_G1_P0Q1: u16 = 0x3642;
    pub const P_G1_P0Q2: u16 = 0x3644;
    pub const P_G1_P0Q3: u16 = 0x3646;
    pub const P_G1_P0Q4: u16 = 0x3648;
    pub const P_R_P0Q0: u16 = 0x364A;
    pub const P_R_P0Q1: u16 = 0x364C;
    pub const P_R_P0Q2: u16 = 0x364E;
    pub const P_R_P0Q3: u16 = 0x3650;
    pub const P_R_P0Q4: u16 = 0x3652;
    pub const P_B_P0Q0: u16 = 0x3654;
    pub const P_B_P0Q1: u16 = 0x3656;
    pub const P_B_P0Q2: u16 = 0x3658;
    pub const P_B_P0Q3: u16 = 0x365A;
    pub const P_B_P0Q4: u16 = 0x365C;
    pub const P_G2_P0Q0: u16 = 0x365E;
    pub const P_G2_P0Q1: u16 = 0x3660;
    pub const P_G2_P0Q2: u16 = 0x3662;
    pub const P_G2_P0Q3: u16 = 0x3664;
    pub const P_G2_P0Q4: u16 = 0x3666;
    pub const P_G1_P1Q0: u16 = 0x3680;
    pub const P_G1_P1Q1: u16 = 0x3682;
    pub const P_G1_P1Q2: u16 = 0x3684;
    pub const P_G1_P1Q3: u16 = 0x3686;
    pub const P_G1_P1Q4: u16 = 0x3688;
    pub const P_R_P1Q0: u16 = 0x368A;
    pub const P_R_P1Q1: u16 = 0x368C;
    pub const P_R_P1Q2: u16 = 0x368E;
    pub const P_R_P1Q3: u16 = 0x3690;
    pub const P_R_P1Q4: u16 = 0x3692;
    pub const P_B_P1Q0: u16 = 0x3694;
    pub const P_B_P1Q1: u16 = 0x3696;
    pub const P_B_P1Q2: u16 = 0x3698;
    pub const P_B_P1Q3: u16 = 0x369A;
    pub const P_B_P1Q4: u16 = 0x369C;
    pub const P_G2_P1Q0: u16 = 0x369E;
    pub const P_G2_P1Q1: u16 = 0x36A0;
    pub const P_G2_P1Q2: u16 = 0x36A2;
    pub const P_G2_P1Q3: u16 = 0x36A4;
    pub const P_G2_P1Q4: u16 = 0x36A6;
    pub const P_G1_P2Q0: u16 = 0x36C0;
    pub const P_G1_P2Q1: u16 = 0x36C2;
    pub const P_G1_P2Q2: u16 = 0x36C4;
    pub const P_G1_P2Q3: u16 = 0x36C6;
    pub const P_G1_P2Q4: u16 = 0x36C8;
    pub const P_R_P2Q0: u16 = 0x36CA;
    pub const P_R_P2Q1: u16 = 0x36CC;
    pub const P_R_P2Q2: u16 = 0x36CE;
    pub const P_R_P2Q3: u16 = 0x36D0;
    pub const P_R_P2Q4: u16 = 0x36D2;
    pub const P_B_P2Q0: u16 = 0x36D4;
    pub const P_B_P2Q1: u16 = 0x36D6;
    pub const P_B_P2Q2: u16 = 0x36D8;
    pub const P_B_P2Q3: u16 = 0x36DA;
    pub const P_B_P2Q4: u16 = 0x36DC;
    pub const P_G2_P2Q0: u16 = 0x36DE;
    pub const P_G2_P2Q1: u16 = 0x36E0;
    pub const P_G2_P2Q2: u16 = 0x36E2;
    pub const P_G2_P2Q3: u16 = 0x36E4;
    pub const P_G2_P2Q4: u16 = 0x36E6;
    pub const P_G1_P3Q0: u16 = 0x3700;
    pub const P_G1_P3Q1: u16 = 0x3702;
    pub const P_G1_P3Q2: u16 = 0x3704;
    pub const P_G1_P3Q3: u16 = 0x3706;
    pub const P_G1_P3Q4: u16 = 0x3708;
    pub const P_R_P3Q0: u16 = 0x370A;
    pub const P_R_P3Q1: u16 = 0x370C;
    pub const P_R_P3Q2: u16 = 0x370E;
    pub const P_R_P3Q3: u16 = 0x3710;
    pub const P_R_P3Q4: u16 = 0x3712;
    pub const P_B_P3Q0: u16 = 0x3714;
    pub const P_B_P3Q1: u16 = 0x3716;
    pub const P_B_P3Q2: u16 = 0x3718;
    pub const P_B_P3Q3: u16 = 0x371A;
    pub const P_B_P3Q4: u16 = 0x371C;
    pub const P_G2_P3Q0: u16 = 0x371E;
    pub const P_G2_P3Q1: u16 = 0x3720;
    pub const P_G2_P3Q2: u16 = 0x3722;
    pub const P_G2_P3Q3: u16 = 0x3724;
    pub const P_G2_P3Q4: u16 = 0x3726;
    pub const P_G1_P4Q0: u16 = 0x3740;
    pub const P_G1_P4Q1: u16 = 0x3742;
    pub const P_G1_P4Q2: u16 = 0x3744;
    pub const P_G1_P4Q3: u16 = 0x3746;
    pub const P_G1_P4Q4: u16 = 0x3748;
    pub const P_R_P4Q0: u16 = 0x374A;
    pub const P_R_P4Q1: u16 = 0x374C;
    pub const P_R_P4Q2: u16 = 0x374E;
    pub const P_R_P4Q3: u16 = 0x3750;
    pub const P_R_P4Q4: u16 = 0x3752;
    pub const P_B_P4Q0: u16 = 0x3754;
    pub const P_B_P4Q1: u16 = 0x3756;
    pub const P_B_P4Q2: u16 = 0x3758;
    pub const P_B_P4Q3: u16 = 0x375A;
    pub const P_B_P4Q4: u16 = 0x375C;
    pub const P_G2_P4Q0: u16 = 0x375E;
    pub const P_G2_P4Q1: u16 = 0x3760;
    pub const P_G2_P4Q2: u16 = 0x3762;
    pub const P_G2_P4Q3: u16 = 0x3764;
    pub const P_G2_P4Q4: u16 = 0x3766;
    pub const CENTER_ROW: u16 = 0x3782;
    pub const CENTER_COLUMN: u16 = 0x3784;

    pub const RESET_REGISTER: u16 = 0x301A;
    pub const CUSTOMER_REV: u16 = 0x31FE;
}

/// Firmware variables
pub mod var {
    pub const MON_MAJOR_VERSION: u16 = 0x8000;
    pub const MON_MINOR_VERSION: u16 = 0x8002;
    pub const MON_RELEASE_VERSION: u16 = 0x8004;
    pub const SEQ_ERROR_CODE: u16 = 0x8406;
    pub const AE_RULE_ALGO: u16 = 0xA404;
    pub const AE_TRACK_AE_TRACKING_DAMPENING_SPEED: u16 = 0xA80A;
    pub const CCM_DELTA_GAIN: u16 = 0xB42A;
    pub const LL_MODE: u16 = 0xBC02;
    pub const CAM_SENSOR_CFG_Y_ADDR_START: u16 = 0xC800;
    pub const CAM_SENSOR_CFG_X_ADDR_START: u16 = 0xC802;
    pub const CAM_SENSOR_CFG_Y_ADDR_END: u16 = 0xC804;
    pub const CAM_SENSOR_CFG_X_ADDR_END: u16 = 0xC806;
    pub const CAM_SENSOR_CFG_PIXCLK: u16 = 0xC808;
    pub const CAM_SENSOR_CFG_ROW_SPEED: u16 = 0xC80C;
    pub const CAM_SENSOR_CFG_FINE_INTEG_TIME_MIN: u16 = 0xC80E;
    pub const CAM_SENSOR_CFG_FINE_INTEG_TIME_MAX: u16 = 0xC810;
    pub const CAM_SENSOR_CFG_FRAME_LENGTH_LINES: u16 = 0xC812;
    pub const CAM_SENSOR_CFG_LINE_LENGTH_PCK: u16 = 0xC814;
    pub const CAM_SENSOR_CFG_FINE_CORRECTION: u16 = 0xC816;
    pub const CAM_SENSOR_CFG_CPIPE_LAST_ROW: u16 = 0xC818;
    pub const CAM_SENSOR_CFG_REG_0_DATA: u16 = 0xC826;
    pub const CAM_SENSOR_CONTROL_READ_MODE: u16 = 0xC834;
    pub const CAM_CROP_WINDOW_XOFFSET: u16 = 0xC854;
    pub const CAM_CROP_WINDOW_YOFFSET: u16 = 0xC856;
    pub const CAM_CROP_WINDOW_WIDTH: u16 = 0xC858;
    pub const CAM_CROP_WINDOW_HEIGHT: u16 = 0xC85A;
    pub const CAM_CROP_CROPMODE: u16 = 0xC85C;
    pub const CAM_OUTPUT_WIDTH: u16 = 0xC868;
    pub const CAM_OUTPUT_HEIGHT: u16 = 0xC86A;
    pub const CAM_OUTPUT_FORMAT: u16 = 0xC86C;
    pub const CAM_OUTPUT_FORMAT_YUV: u16 = 0xC86E;
    pub const CAM_OUTPUT_Y_OFFSET: u16 = 0xC870;
    pub const CAM_AET_AEMODE: u16 = 0xC878;
    pub const CAM_AET_TARGET_AVERAGE_LUMA_DARK: u16 = 0xC87B;
    pub const CAM_AET_BLACK_CLIPPING_TARGET: u16 = 0xC87C;
    pub const CAM_AET_AE_MAX_VIRT_AGAIN: u16 = 0xC886;
    pub const CAM_AET_MAX_FRAME_RATE: u16 = 0xC88C;
    pub const CAM_AET_MIN_FRAME_RATE: u16 = 0xC88E;
    pub const CAM_AET_TARGET_GAIN: u16 = 0xC890;
    pub const CAM_AWB_CCM_L_0: u16 = 0xC892;
    pub const CAM_AWB_CCM_L_1: u16 = 0xC894;
    pub const CAM_AWB_CCM_L_2: u16 = 0xC896;
    pub const CAM_AWB_CCM_L_3: u16 = 0xC898;
    pub const CAM_AWB_CCM_L_4: u16 = 0xC89A;
    pub const CAM_AWB_CCM_L_5: u16 = 0xC89C;
    pub const CAM_AWB_CCM_L_6: u16 = 0xC89E;
    pub const CAM_AWB_CCM_L_7: u16 = 0xC8A0;
    pub const CAM_AWB_CCM_L_8: u16 = 0xC8A2;
    pub const CAM_AWB_CCM_M_0: u16 = 0xC8A4;
    pub const CAM_AWB_CCM_M_1: u16 = 0xC8A6;
    pub const CAM_AWB_CCM_M_2: u16 = 0xC8A8;
    pub const CAM_AWB_CCM_M_3: u16 = 0xC8AA;
    pub const CAM_AWB_CCM_M_4: u16 = 0xC8AC;
    pub const CAM_AWB_CCM_M_5: u16 = 0xC8AE;
    pub const CAM_AWB_CCM_M_6: u16 = 0xC8B0;
    pub const CAM_AWB_CCM_M_7: u16 = 0xC8B2;
    pub const CAM_AWB_CCM_M_8: u16 = 0xC8B4;
    pub const CAM_AWB_CCM_R_0: u16 = 0xC8B6;
    pub const CAM_AWB_CCM_R_1: u16 = 0xC8B8;
    pub const CAM_AWB_CCM_R_2: u16 = 0xC8BA;
    pub const CAM_AWB_CCM_R_3: u16 = 0xC8BC;
    pub const CAM_AWB_CCM_R_4: u16 = 0xC8BE;
    pub const CAM_AWB_CCM_R_5: u16 = 0xC8C0;
    pub const CAM_AWB_CCM_R_6: u16 = 0xC8C2;
    pub const CAM_AWB_CCM_R_7: u16 = 0xC8C4;
    pub const CAM_AWB_CCM_R_8: u16 = 0xC8C6;
    pub const CAM_AWB_CCM_L_RG_GAIN: u16 = 0xC8C8;
    pub const CAM_AWB_CCM_L_BG_GAIN: u16 = 0xC8CA;
    pub const CAM_AWB_CCM_M_RG_GAIN: u16 = 0xC8CC;
    pub const CAM_AWB_CCM_M_BG_GAIN: u16 = 0xC8CE;
    pub const CAM_AWB_CCM_R_RG_GAIN: u16 = 0xC8D0;
    pub const CAM_AWB_CCM_R_BG_GAIN: u16 = 0xC8D2;
    pub const CAM_AWB_CCM_L_CTEMP: u16 = 0xC8D4;
    pub const CAM_AWB_CCM_M_CTEMP: u16 = 0xC8D6;
    pub const CAM_AWB_CCM_R_CTEMP: u16 = 0xC8D8;
    pub const CAM_AWB_AWB_XSCALE: u16 = 0xC8F2;
    pub const CAM_AWB_AWB_YSCALE: u16 = 0xC8F3;
    pub const CAM_AWB_AWB_WEIGHTS_0: u16 = 0xC8F4;
    pub const CAM_AWB_AWB_WEIGHTS_1: u16 = 0xC8F6;
    pub const CAM_AWB_AWB_WEIGHTS_2: u16 = 0xC8F8;
    pub const CAM_AWB_AWB_WEIGHTS_3: u16 = 0xC8FA;
    pub const CAM_AWB_AWB_WEIGHTS_4: u16 = 0xC8FC;
    pub const CAM_AWB_AWB_WEIGHTS_5: u16 = 0xC8FE;
    pub const CAM_AWB_AWB_WEIGHTS_6: u16 = 0xC900;
    pub const CAM_AWB_AWB_WEIGHTS_7: u16 = 0xC902;
    pub const CAM_AWB_AWB_XSHIFT_PRE_ADJ: u16 = 0xC904;
    pub const CAM_AWB_AWB_YSHIFT_PRE_ADJ: u16 = 0xC906;
    pub const CAM_AWB_K_R_L: u16 = 0xC90C;
    pub const CAM_AWB_K_G_L: u16 = 0xC90D;
    pub const CAM_AWB_K_B_L: u16 = 0xC90E;
    pub const CAM_AWB_K_R_R: u16 = 0xC90F;
    pub const CAM_AWB_K_G_R: u16 = 0xC910;
    pub const CAM_AWB_K_B_R: u16 = 0xC911;
    pub const CAM_STAT_AWB_CLIP_WINDOW_XSTART: u16 = 0xC914;
    pub const CAM_STAT_AWB_CLIP_WINDOW_YSTART: u16 = 0xC916;
    pub const CAM_STAT_AWB_CLIP_WINDOW_XEND: u16 = 0xC918;
    pub const CAM_STAT_AWB_CLIP_WINDOW_YEND: u16 = 0xC91A;
    pub const CAM_STAT_AE_INITIAL_WINDOW_XSTART: u16 = 0xC91C;
    pub const CAM_STAT_AE_INITIAL_WINDOW_YSTART: u16 = 0xC91E;
    pub const CAM_STAT_AE_INITIAL_WINDOW_XEND: u16 = 0xC920;
    pub const CAM_STAT_AE_INITIAL_WINDOW_YEND: u16 = 0xC922;
    pub const CAM_LL_START_BRIGHTNESS: u16 = 0xC926;
    pub const CAM_LL_STOP_BRIGHTNESS: u16 = 0xC928;
    pub const CAM_LL_START_SATURATION: u16 = 0xC92A;
    pub const CAM_LL_END_SATURATION: u16 = 0xC92B;
    pub const CAM_LL_START_DESATURATION: u16 = 0xC92C;
    pub const CAM_LL_END_DESATURATION: u16 = 0xC92D;
    pub const CAM_LL_START_DEMOSAIC: u16 = 0xC92E;
    pub const CAM_LL_START_AP_GAIN: u16 = 0xC92F;
    pub const CAM_LL_START_AP_THRESH: u16 = 0xC930;
    pub const CAM_LL_STOP_DEMOSAIC: u16 = 0xC931;
    pub const CAM_LL_STOP_AP_GAIN: u16 = 0xC932;
    pub const CAM_LL_STOP_AP_THRESH: u16 = 0xC933;
    pub const CAM_LL_START_NR_RED: u16 = 0xC934;
    pub const CAM_LL_START_NR_GREEN: u16 = 0xC935;
    pub const CAM_LL_START_NR_BLUE: u16 = 0xC936;
    pub const CAM_LL_START_NR_THRESH: u16 = 0xC937;
    pub const CAM_LL_STOP_NR_RED: u16 = 0xC938;
    pub const CAM_LL_STOP_NR_GREEN: u16 = 0xC939;
    pub const CAM_LL_STOP_NR_BLUE: u16 = 0xC93A;
    pub const CAM_LL_STOP_NR_THRESH: u16 = 0xC93B;
    pub const CAM_LL_START_CONTRAST_BM: u16 = 0xC93C;
    pub const CAM_LL_STOP_CONTRAST_BM: u16 = 0xC93E;
    pub const CAM_LL_GAMMA: u16 = 0xC940;
    pub const CAM_LL_START_CONTRAST_GRADIENT: u16 = 0xC942;
    pub const CAM_LL_STOP_CONTRAST_GRADIENT: u16 = 0xC943;
    pub const CAM_LL_START_CONTRAST_LUMA_PERCENTAGE: u16 = 0xC944;
    pub const CAM_LL_STOP_CONTRAST_LUMA_PERCENTAGE: u16 = 0xC945;
    pub const CAM_LL_START_GAIN_METRIC: u16 = 0xC946;
    pub const CAM_LL_STOP_GAIN_METRIC: u16 = 0xC948;
    pub const CAM_LL_START_FADE_TO_BLACK_LUMA: u16 = 0xC94A;
    pub const CAM_LL_STOP_FADE_TO_BLACK_LUMA: u16 = 0xC94C;
    pub const CAM_LL_CLUSTER_DC_TH_BM: u16 = 0xC94E;
    pub const CAM_LL_CLUSTER_DC_GATE_PERCENTAGE: u16 = 0xC950;
    pub const CAM_LL_SUMMING_SENSITIVITY_FACTOR: u16 = 0xC951;
    pub const CAM_LL_START_TARGET_LUMA_BM: u16 = 0xC952;
    pub const CAM_LL_STOP_TARGET_LUMA_BM: u16 = 0xC954;
    pub const CAM_PGA_PGA_CONTROL: u16 = 0xC95E;
    pub const CAM_PGA_L_CONFIG_COLOR_TEMP: u16 = 0xC960;
    pub const CAM_PGA_L_CONFIG_GREEN_RED_Q14: u16 = 0xC962;
    pub const CAM_PGA_L_CONFIG_RED_Q14: u16 = 0xC964;
    pub const CAM_PGA_L_CONFIG_GREEN_BLUE_Q14: u16 = 0xC966;
    pub const CAM_PGA_L_CONFIG_BLUE_Q14: u16 = 0xC968;
    pub const CAM_PGA_M_CONFIG_COLOR_TEMP: u16 = 0xC96A;
    pub const CAM_PGA_M_CONFIG_GREEN_RED_Q14: u16 = 0xC96C;
    pub const CAM_PGA_M_CONFIG_RED_Q14: u16 = 0xC96E;
    pub const CAM_PGA_M_CONFIG_GREEN_BLUE_Q14: u16 = 0xC970;
    pub const CAM_PGA_M_CONFIG_BLUE_Q14: u16 = 0xC972;
    pub const CAM_PGA_R_CONFIG_COLOR_TEMP: u16 = 0xC974;
    pub const CAM_PGA_R_CONFIG_GREEN_RED_Q14: u16 = 0xC976;
    pub const CAM_PGA_R_CONFIG_RED_Q14: u16 = 0xC978;
    pub const CAM_PGA_R_CONFIG_GREEN_BLUE_Q14: u16 = 0xC97A;
    pub const CAM_PGA_R_CONFIG_BLUE_Q14: u16 = 0xC97C;
    pub const CAM_SYSCTL_PLL_ENABLE: u16 = 0xC97E;
    pub const CAM_SYSCTL_PLL_DIVIDER_M_N: u16 = 0xC980;
    pub const CAM_SYSCTL_PLL_DIVIDER_P: u16 = 0xC982;
    pub const CAM_PORT_OUTPUT_CONTROL: u16 = 0xC984;
    pub const UVC_AE_MODE_CONTROL: u16 = 0xCC00;
    pub const UVC_WHITE_BALANCE_TEMPERATURE_AUTO_CONTROL: u16 = 0xCC01;
    pub const UVC_AE_PRIORITY_CONTROL: u16 = 0xCC02;
    pub const UVC_POWER_LINE_FREQUENCY_CONTROL: u16 = 0xCC03;
    pub const UVC_EXPOSURE_TIME_ABSOLUTE_CONTROL: u16 = 0xCC04;
    pub const UVC_BACKLIGHT_COMPENSATION_CONTROL: u16 = 0xCC08;
    pub const UVC_BRIGHTNESS_CONTROL: u16 = 0xCC0A;
    pub const UVC_CONTRAST_CONTROL: u16 = 0xCC0C;
    pub const UVC_GAIN_CONTROL: u16 = 0xCC0E;
    pub const UVC_HUE_CONTROL: u16 = 0xCC10;
    pub const UVC_SATURATION_CONTROL: u16 = 0xCC12;
    pub const UVC_SHARPNESS_CONTROL: u16 = 0xCC14;
    pub const UVC_GAMMA_CONTROL: u16 = 0xCC16;
    pub const UVC_WHITE_BALANCE_TEMPERATURE_CONTROL: u16 = 0xCC18;
    pub const UVC_FRAME_INTERVAL_CONTROL: u16 = 0xCC1C;
    pub const UVC_MANUAL_EXPOSURE_CONFIGURATION: u16 = 0xCC20;
    pub const UVC_FLICKER_AVOIDANCE_CONFIGURATION: u16 = 0xCC21;
    pub const UVC_ALGO: u16 = 0xCC22;
    pub const UVC_RESULT_STATUS: u16 = 0xCC24;
    pub const SYSMGR_NEXT_STATE: u16 = 0xDC00;
    pub const SYSMGR_CURRENT_STATE: u16 = 0xDC01;
    pub const PATCHLDR_LOADER_ADDRESS: u16 = 0xE000;
    pub const PATCHLDR_PATCH_ID: u16 = 0xE002;
    pub const PATCHLDR_FIRMWARE_ID: u16 = 0xE004;
    pub const PATCHLDR_APPLY_STATUS: u16 = 0xE008;
    pub const CMD_HANDLER_WAIT_EVENT_ID: u16 = 0xFC00;
    pub const CMD_HANDLER_NUM_EVENTS: u16 = 0xFC02;
}

/// Host commands understood by the firmware command handler.
/// Each one occupies its own bit of `reg::COMMAND_REGISTER`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum HostCommand {
    ApplyPatch = 0x0001,
    SetState = 0x0002,
    Refresh = 0x0004,
    WaitForEvent = 0x0008,
}

/// Coarse operating mode of the firmware system manager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SystemState {
    ConfigChangePending = 0x28,
    Streaming = 0x31,
    EnterStreaming = 0x34,
    SuspendPending = 0x40,
    Suspended = 0x41,
    StandbyPending = 0x50,
    Standby = 0x52,
    LeaveStandby = 0x54,
}

impl SystemState {
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0x28 => Some(SystemState::ConfigChangePending),
            0x31 => Some(SystemState::Streaming),
            0x34 => Some(SystemState::EnterStreaming),
            0x40 => Some(SystemState::SuspendPending),
            0x41 => Some(SystemState::Suspended),
            0x50 => Some(SystemState::StandbyPending),
            0x52 => Some(SystemState::Standby),
            0x54 => Some(SystemState::LeaveStandby),
            _ => None,
        }
    }
}

/// Status codes reported by the firmware in its various status variables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirmwareError {
    NoError,
    BadFile,
    Access,
    Busy,
    Invalid,
    NoSpace,
    Range,
    NoSys,
    InvalidCropX,
    InvalidCropY,
    InvalidTimingChain,
    Other(u8),
}

impl FirmwareError {
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            0x00 => FirmwareError::NoError,
            0x05 => FirmwareError::BadFile,
            0x08 => FirmwareError::Access,
            0x09 => FirmwareError::Busy,
            0x0C => FirmwareError::Invalid,
            0x0D => FirmwareError::NoSpace,
            0x0E => FirmwareError::Range,
            0x0F => FirmwareError::NoSys,
            0x13 => FirmwareError::InvalidCropX,
            0x14 => FirmwareError::InvalidCropY,
            0x15 => FirmwareError::InvalidTimingChain,
            other => FirmwareError::Other(other),
        }
    }

    pub fn raw(self) -> u8 {
        match self {
            FirmwareError::NoError => 0x00,
            FirmwareError::BadFile => 0x05,
            FirmwareError::Access => 0x08,
            FirmwareError::Busy => 0x09,
            FirmwareError::Invalid => 0x0C,
            FirmwareError::NoSpace => 0x0D,
            FirmwareError::Range => 0x0E,
            FirmwareError::NoSys => 0x0F,
            FirmwareError::InvalidCropX => 0x13,
            FirmwareError::InvalidCropY => 0x14,
            FirmwareError::InvalidTimingChain => 0x15,
            FirmwareError::Other(other) => other,
        }
    }
}

bitflags! {
    /// Bits of `var::CAM_SENSOR_CONTROL_READ_MODE`
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ReadMode: u16 {
        const HORIZONTAL_MIRROR = 0x0001;
        const VERTICAL_FLIP = 0x0002;
    }
}

bitflags! {
    /// Bits of `var::LL_MODE`
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct LowLightMode: u16 {
        const FADE_TO_BLACK = 0x0008;
    }
}

bitflags! {
    /// Bits of `reg::RESET_AND_MISC_CONTROL`
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ResetControl: u16 {
        const SOFT_RESET = 0x0001;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn firmware_error_raw_values_survive_decoding() {
        for raw in 0u8..=0x20 {
            assert_eq!(FirmwareError::from_raw(raw).raw(), raw);
        }
        assert_eq!(FirmwareError::from_raw(0x0C), FirmwareError::Invalid);
        assert_eq!(FirmwareError::from_raw(0x01), FirmwareError::Other(0x01));
    }

    #[test]
    fn unknown_system_state_is_rejected() {
        assert_eq!(SystemState::from_raw(0x31), Some(SystemState::Streaming));
        assert_eq!(SystemState::from_raw(0x00), None);
    }
}
