/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! Vendor-recommended register tables, firmware patches and output modes

use crate::bus::RegisterEntry;
use crate::format::{
    FormatDescriptor, FrameInterval, FrameSizeDescriptor, PIXEL_FORMAT_YUYV,
};
use crate::patch::PatchDescriptor;
use crate::registers::{reg, var};

/// Everything the driver writes that is configuration rather than behavior
pub struct Tables {
    pub pll: &'static [RegisterEntry],
    pub sensor_optimization: &'static [RegisterEntry],
    pub errata_1: &'static [RegisterEntry],
    /// Also written after every soft reset
    pub errata_2: &'static [RegisterEntry],
    pub pga: &'static [RegisterEntry],
    pub awb: &'static [RegisterEntry],
    pub cpipe_preference: &'static [RegisterEntry],
    pub features: &'static [RegisterEntry],
    pub uvc_defaults: &'static [RegisterEntry],
    /// Applied in order during `initialize`
    pub patches: &'static [PatchDescriptor<'static>],
    /// The first entry is the default and the fallback
    pub formats: &'static [FormatDescriptor],
    /// The first entry is the default
    pub frame_sizes: &'static [FrameSizeDescriptor],
}

pub static DEFAULT_TABLES: Tables = Tables {
    pll: PLL_SETTINGS,
    sensor_optimization: SENSOR_OPTIMIZATION,
    errata_1: ERRATA_1,
    errata_2: ERRATA_2,
    pga: PGA_SETTINGS,
    awb: AWB_SETTINGS,
    cpipe_preference: CPIPE_PREFERENCE,
    features: FEATURES,
    uvc_defaults: UVC_SETTINGS,
    patches: &PATCHES,
    formats: &FORMATS,
    frame_sizes: &FRAME_SIZES,
};

pub static FORMATS: [FormatDescriptor; 1] = [FormatDescriptor {
    description: "YUYV 4:2:2",
    pixel_format: PIXEL_FORMAT_YUYV,
    bytes_per_pixel: 2,
    regs: FMT_YUV422,
}];

const ONLY_30FPS: [FrameInterval; 3] = [
    FrameInterval::new(1, 30),
    FrameInterval::EMPTY,
    FrameInterval::EMPTY,
];

pub static FRAME_SIZES: [FrameSizeDescriptor; 5] = [
    FrameSizeDescriptor {
        width: 1280,
        height: 960,
        regs: SIZE_1280X960,
        frame_intervals: ONLY_30FPS,
    },
    FrameSizeDescriptor {
        width: 1280,
        height: 720,
        regs: SIZE_1280X720,
        frame_intervals: [
            FrameInterval::new(1, 30),
            FrameInterval::new(3, 110),
            FrameInterval::EMPTY,
        ],
    },
    FrameSizeDescriptor {
        width: 640,
        height: 480,
        regs: SIZE_640X480,
        frame_intervals: ONLY_30FPS,
    },
    FrameSizeDescriptor {
        width: 320,
        height: 240,
        regs: SIZE_320X240,
        frame_intervals: ONLY_30FPS,
    },
    FrameSizeDescriptor {
        width: 160,
        height: 120,
        regs: SIZE_160X120,
        frame_intervals: ONLY_30FPS,
    },
];

pub static PATCHES: [PatchDescriptor<'static>; 2] = [
    PatchDescriptor {
        description: "black level correction fix",
        physical_address: 0x5000,
        patch_write_address: 0xd000,
        patch_loader_address: 0x010c,
        patch_id: 0x0202,
        firmware_id: 0x4103_0202,
        payload: &BLACK_LEVEL_CORRECTION_FIX,
    },
    PatchDescriptor {
        description: "adaptive sensitivity",
        physical_address: 0x512c,
        patch_write_address: 0xd12c,
        patch_loader_address: 0x04b4,
        patch_id: 0x0302,
        firmware_id: 0x4103_0202,
        payload: &ADAPTIVE_SENSITIVITY,
    },
];

/// PLL setup for the 24 MHz reference clock.
pub const PLL_SETTINGS: &[RegisterEntry] = &[
    RegisterEntry::u16(reg::LOGICAL_ADDRESS_ACCESS, 0x0000),
    RegisterEntry::u8(var::CAM_SYSCTL_PLL_ENABLE, 0x01),
    RegisterEntry::u16(var::CAM_SYSCTL_PLL_DIVIDER_M_N, 0x0120),
    RegisterEntry::u16(var::CAM_SYSCTL_PLL_DIVIDER_P, 0x0700),
    RegisterEntry::END,
];

/// Undocumented analog tuning recommended by the vendor.
pub const SENSOR_OPTIMIZATION: &[RegisterEntry] = &[
    RegisterEntry::u16(reg::LOGICAL_ADDRESS_ACCESS, 0x0000),
    RegisterEntry::u16(0x316A, 0x8270),
    RegisterEntry::u16(0x316C, 0x8270),
    RegisterEntry::u16(0x3ED0, 0x3605),
    RegisterEntry::u16(0x3ED2, 0x77FF),
    RegisterEntry::u16(0x316E, 0xC233),
    RegisterEntry::u16(0x3180, 0x87FF),
    RegisterEntry::u16(0x30D4, 0x6080),
    RegisterEntry::u16(0xA802, 0x0008),
    RegisterEntry::END,
];

pub const ERRATA_1: &[RegisterEntry] = &[
    RegisterEntry::u16(reg::LOGICAL_ADDRESS_ACCESS, 0x0000),
    RegisterEntry::u16(0x3E14, 0xFF39),
    RegisterEntry::END,
];

/// Also re-applied after every soft reset.
pub const ERRATA_2: &[RegisterEntry] = &[
    RegisterEntry::u16(reg::LOGICAL_ADDRESS_ACCESS, 0x0000),
    RegisterEntry::u16(reg::RESET_REGISTER, 0x0234),
    RegisterEntry::END,
];

/// Lens shading correction polynomials.
pub const PGA_SETTINGS: &[RegisterEntry] = &[
    RegisterEntry::u16(reg::LOGICAL_ADDRESS_ACCESS, 0x0000),
    RegisterEntry::u16(var::CAM_PGA_PGA_CONTROL, 0x0003),
    RegisterEntry::u16(var::CAM_PGA_PGA_CONTROL, 0x0002),
    RegisterEntry::u16(reg::P_G1_P0Q0, 0x0170),
    RegisterEntry::u16(reg::P_G1_P0Q1, 0x0ECB),
    RegisterEntry::u16(reg::P_G1_P0Q2, 0x57D0),
    RegisterEntry::u16(reg::P_G1_P0Q3, 0x830D),
    RegisterEntry::u16(reg::P_G1_P0Q4, 0xF26E),
    RegisterEntry::u16(reg::P_R_P0Q0, 0x7E2F),
    RegisterEntry::u16(reg::P_R_P0Q1, 0x48AB),
    RegisterEntry::u16(reg::P_R_P0Q2, 0x6650),
    RegisterEntry::u16(reg::P_R_P0Q3, 0xCD4C),
    RegisterEntry::u16(reg::P_R_P0Q4, 0xAE8E),
    RegisterEntry::u16(reg::P_B_P0Q0, 0x7EAF),
    RegisterEntry::u16(reg::P_B_P0Q1, 0x5ACC),
    RegisterEntry::u16(reg::P_B_P0Q2, 0x1B90),
    RegisterEntry::u16(reg::P_B_P0Q3, 0xFA8C),
    RegisterEntry::u16(reg::P_B_P0Q4, 0x92EE),
    RegisterEntry::u16(reg::P_G2_P0Q0, 0x7DCF),
    RegisterEntry::u16(reg::P_G2_P0Q1, 0x4AEA),
    RegisterEntry::u16(reg::P_G2_P0Q2, 0x68B0),
    RegisterEntry::u16(reg::P_G2_P0Q3, 0xB02D),
    RegisterEntry::u16(reg::P_G2_P0Q4, 0xA88F),
    RegisterEntry::u16(reg::P_G1_P1Q0, 0x368C),
    RegisterEntry::u16(reg::P_G1_P1Q1, 0x074D),
    RegisterEntry::u16(reg::P_G1_P1Q2, 0x268F),
    RegisterEntry::u16(reg::P_G1_P1Q3, 0x7E8A),
    RegisterEntry::u16(reg::P_G1_P1Q4, 0x97B0),
    RegisterEntry::u16(reg::P_R_P1Q0, 0x01EC),
    RegisterEntry::u16(reg::P_R_P1Q1, 0x0B4E),
    RegisterEntry::u16(reg::P_R_P1Q2, 0x124F),
    RegisterEntry::u16(reg::P_R_P1Q3, 0xAFCE),
    RegisterEntry::u16(reg::P_R_P1Q4, 0x8590),
    RegisterEntry::u16(reg::P_B_P1Q0, 0x03CD),
    RegisterEntry::u16(reg::P_B_P1Q1, 0x092D),
    RegisterEntry::u16(reg::P_B_P1Q2, 0x62EB),
    RegisterEntry::u16(reg::P_B_P1Q3, 0xA14E),
    RegisterEntry::u16(reg::P_B_P1Q4, 0xB76F),
    RegisterEntry::u16(reg::P_G2_P1Q0, 0x0D4D),
    RegisterEntry::u16(reg::P_G2_P1Q1, 0xB9AB),
    RegisterEntry::u16(reg::P_G2_P1Q2, 0x97CC),
    RegisterEntry::u16(reg::P_G2_P1Q3, 0x57EA),
    RegisterEntry::u16(reg::P_G2_P1Q4, 0x91EF),
    RegisterEntry::u16(reg::P_G1_P2Q0, 0x0DF1),
    RegisterEntry::u16(reg::P_G1_P2Q1, 0x8F0C),
    RegisterEntry::u16(reg::P_G1_P2Q2, 0x7610),
    RegisterEntry::u16(reg::P_G1_P2Q3, 0x2B6C),
    RegisterEntry::u16(reg::P_G1_P2Q4, 0xA6F3),
    RegisterEntry::u16(reg::P_R_P2Q0, 0x0691),
    RegisterEntry::u16(reg::P_R_P2Q1, 0xF04A),
    RegisterEntry::u16(reg::P_R_P2Q2, 0x33D1),
    RegisterEntry::u16(reg::P_R_P2Q3, 0xADAE),
    RegisterEntry::u16(reg::P_R_P2Q4, 0xC9B3),
    RegisterEntry::u16(reg::P_B_P2Q0, 0x5A90),
    RegisterEntry::u16(reg::P_B_P2Q1, 0x9B6D),
    RegisterEntry::u16(reg::P_B_P2Q2, 0x57D0),
    RegisterEntry::u16(reg::P_B_P2Q3, 0x0F2D),
    RegisterEntry::u16(reg::P_B_P2Q4, 0xFD72),
    RegisterEntry::u16(reg::P_G2_P2Q0, 0x0DB1),
    RegisterEntry::u16(reg::P_G2_P2Q1, 0xB4EA),
    RegisterEntry::u16(reg::P_G2_P2Q2, 0x68F0),
    RegisterEntry::u16(reg::P_G2_P2Q3, 0x8FCD),
    RegisterEntry::u16(reg::P_G2_P2Q4, 0xA253),
    RegisterEntry::u16(reg::P_G1_P3Q0, 0x052D),
    RegisterEntry::u16(reg::P_G1_P3Q1, 0xEC8D),
    RegisterEntry::u16(reg::P_G1_P3Q2, 0xB771),
    RegisterEntry::u16(reg::P_G1_P3Q3, 0x338F),
    RegisterEntry::u16(reg::P_G1_P3Q4, 0x6292),
    RegisterEntry::u16(reg::P_R_P3Q0, 0x280D),
    RegisterEntry::u16(reg::P_R_P3Q1, 0x9030),
    RegisterEntry::u16(reg::P_R_P3Q2, 0xB571),
    RegisterEntry::u16(reg::P_R_P3Q3, 0x4531),
    RegisterEntry::u16(reg::P_R_P3Q4, 0x4B52),
    RegisterEntry::u16(reg::P_B_P3Q0, 0x290D),
    RegisterEntry::u16(reg::P_B_P3Q1, 0xD02F),
    RegisterEntry::u16(reg::P_B_P3Q2, 0x9611),
    RegisterEntry::u16(reg::P_B_P3Q3, 0x22B1),
    RegisterEntry::u16(reg::P_B_P3Q4, 0x68D2),
    RegisterEntry::u16(reg::P_G2_P3Q0, 0x6D4D),
    RegisterEntry::u16(reg::P_G2_P3Q1, 0x9A2D),
    RegisterEntry::u16(reg::P_G2_P3Q2, 0x8611),
    RegisterEntry::u16(reg::P_G2_P3Q3, 0x1470),
    RegisterEntry::u16(reg::P_G2_P3Q4, 0x51F2),
    RegisterEntry::u16(reg::P_G1_P4Q0, 0x89EB),
    RegisterEntry::u16(reg::P_G1_P4Q1, 0xC28E),
    RegisterEntry::u16(reg::P_G1_P4Q2, 0xF254),
    RegisterEntry::u16(reg::P_G1_P4Q3, 0x5AD2),
    RegisterEntry::u16(reg::P_G1_P4Q4, 0x6CB6),
    RegisterEntry::u16(reg::P_R_P4Q0, 0x1FAF),
    RegisterEntry::u16(reg::P_R_P4Q1, 0xC78D),
    RegisterEntry::u16(reg::P_R_P4Q2, 0x8375),
    RegisterEntry::u16(reg::P_R_P4Q3, 0x6152),
    RegisterEntry::u16(reg::P_R_P4Q4, 0x7256),
    RegisterEntry::u16(reg::P_B_P4Q0, 0x140D),
    RegisterEntry::u16(reg::P_B_P4Q1, 0x172D),
    RegisterEntry::u16(reg::P_B_P4Q2, 0xCCD4),
    RegisterEntry::u16(reg::P_B_P4Q3, 0x3432),
    RegisterEntry::u16(reg::P_B_P4Q4, 0x46F6),
    RegisterEntry::u16(reg::P_G2_P4Q0, 0x92AE),
    RegisterEntry::u16(reg::P_G2_P4Q1, 0x9A8E),
    RegisterEntry::u16(reg::P_G2_P4Q2, 0xEF74),
    RegisterEntry::u16(reg::P_G2_P4Q3, 0x5C32),
    RegisterEntry::u16(reg::P_G2_P4Q4, 0x6656),
    RegisterEntry::u16(reg::CENTER_ROW, 0x01E0),
    RegisterEntry::u16(reg::CENTER_COLUMN, 0x02A0),
    RegisterEntry::u16(var::CAM_PGA_L_CONFIG_COLOR_TEMP, 0x0AF0),
    RegisterEntry::u16(var::CAM_PGA_L_CONFIG_GREEN_RED_Q14, 0x79AD),
    RegisterEntry::u16(var::CAM_PGA_L_CONFIG_RED_Q14, 0x57B0),
    RegisterEntry::u16(var::CAM_PGA_L_CONFIG_GREEN_BLUE_Q14, 0x78D8),
    RegisterEntry::u16(var::CAM_PGA_L_CONFIG_BLUE_Q14, 0x7460),
    RegisterEntry::u16(var::CAM_PGA_M_CONFIG_COLOR_TEMP, 0x0FA0),
    RegisterEntry::u16(var::CAM_PGA_M_CONFIG_GREEN_RED_Q14, 0x8177),
    RegisterEntry::u16(var::CAM_PGA_M_CONFIG_RED_Q14, 0x815C),
    RegisterEntry::u16(var::CAM_PGA_M_CONFIG_GREEN_BLUE_Q14, 0x8111),
    RegisterEntry::u16(var::CAM_PGA_M_CONFIG_BLUE_Q14, 0x8057),
    RegisterEntry::u16(var::CAM_PGA_R_CONFIG_COLOR_TEMP, 0x1964),
    RegisterEntry::u16(var::CAM_PGA_R_CONFIG_GREEN_RED_Q14, 0x7C2A),
    RegisterEntry::u16(var::CAM_PGA_R_CONFIG_RED_Q14, 0x669C),
    RegisterEntry::u16(var::CAM_PGA_R_CONFIG_GREEN_BLUE_Q14, 0x7E3F),
    RegisterEntry::u16(var::CAM_PGA_R_CONFIG_BLUE_Q14, 0x73D2),
    RegisterEntry::u16(var::CAM_PGA_PGA_CONTROL, 0x0003),
    RegisterEntry::END,
];

/// Color correction matrices and AWB weighting.
pub const AWB_SETTINGS: &[RegisterEntry] = &[
    RegisterEntry::u16(reg::LOGICAL_ADDRESS_ACCESS, 0x0000),
    RegisterEntry::u16(var::CAM_AWB_CCM_L_0, 0x0267),
    RegisterEntry::u16(var::CAM_AWB_CCM_L_1, 0xFF1A),
    RegisterEntry::u16(var::CAM_AWB_CCM_L_2, 0xFFB3),
    RegisterEntry::u16(var::CAM_AWB_CCM_L_3, 0xFF80),
    RegisterEntry::u16(var::CAM_AWB_CCM_L_4, 0x0166),
    RegisterEntry::u16(var::CAM_AWB_CCM_L_5, 0x0003),
    RegisterEntry::u16(var::CAM_AWB_CCM_L_6, 0xFF9A),
    RegisterEntry::u16(var::CAM_AWB_CCM_L_7, 0xFEB4),
    RegisterEntry::u16(var::CAM_AWB_CCM_L_8, 0x024D),
    RegisterEntry::u16(var::CAM_AWB_CCM_M_0, 0x01BF),
    RegisterEntry::u16(var::CAM_AWB_CCM_M_1, 0xFF01),
    RegisterEntry::u16(var::CAM_AWB_CCM_M_2, 0xFFF3),
    RegisterEntry::u16(var::CAM_AWB_CCM_M_3, 0xFF75),
    RegisterEntry::u16(var::CAM_AWB_CCM_M_4, 0x0198),
    RegisterEntry::u16(var::CAM_AWB_CCM_M_5, 0xFFFD),
    RegisterEntry::u16(var::CAM_AWB_CCM_M_6, 0xFF9A),
    RegisterEntry::u16(var::CAM_AWB_CCM_M_7, 0xFEE7),
    RegisterEntry::u16(var::CAM_AWB_CCM_M_8, 0x02A8),
    RegisterEntry::u16(var::CAM_AWB_CCM_R_0, 0x01D9),
    RegisterEntry::u16(var::CAM_AWB_CCM_R_1, 0xFF26),
    RegisterEntry::u16(var::CAM_AWB_CCM_R_2, 0xFFF3),
    RegisterEntry::u16(var::CAM_AWB_CCM_R_3, 0xFFB3),
    RegisterEntry::u16(var::CAM_AWB_CCM_R_4, 0x0132),
    RegisterEntry::u16(var::CAM_AWB_CCM_R_5, 0xFFE8),
    RegisterEntry::u16(var::CAM_AWB_CCM_R_6, 0xFFDA),
    RegisterEntry::u16(var::CAM_AWB_CCM_R_7, 0xFECD),
    RegisterEntry::u16(var::CAM_AWB_CCM_R_8, 0x02C2),
    RegisterEntry::u16(var::CAM_AWB_CCM_L_RG_GAIN, 0x0075),
    RegisterEntry::u16(var::CAM_AWB_CCM_L_BG_GAIN, 0x011C),
    RegisterEntry::u16(var::CAM_AWB_CCM_M_RG_GAIN, 0x009A),
    RegisterEntry::u16(var::CAM_AWB_CCM_M_BG_GAIN, 0x0105),
    RegisterEntry::u16(var::CAM_AWB_CCM_R_RG_GAIN, 0x00A4),
    RegisterEntry::u16(var::CAM_AWB_CCM_R_BG_GAIN, 0x00AC),
    RegisterEntry::u16(var::CAM_AWB_CCM_L_CTEMP, 0x0A8C),
    RegisterEntry::u16(var::CAM_AWB_CCM_M_CTEMP, 0x0F0A),
    RegisterEntry::u16(var::CAM_AWB_CCM_R_CTEMP, 0x1964),
    RegisterEntry::u16(var::CAM_STAT_AWB_CLIP_WINDOW_XSTART, 0x0000),
    RegisterEntry::u16(var::CAM_STAT_AWB_CLIP_WINDOW_YSTART, 0x0000),
    RegisterEntry::u16(var::CAM_STAT_AWB_CLIP_WINDOW_XEND, 0x04FF),
    RegisterEntry::u16(var::CAM_STAT_AWB_CLIP_WINDOW_YEND, 0x02CF),
    RegisterEntry::u16(var::CAM_AWB_AWB_XSHIFT_PRE_ADJ, 0x0033),
    RegisterEntry::u16(var::CAM_AWB_AWB_YSHIFT_PRE_ADJ, 0x0040),
    RegisterEntry::u8(var::CAM_AWB_AWB_XSCALE, 0x03),
    RegisterEntry::u8(var::CAM_AWB_AWB_YSCALE, 0x02),
    RegisterEntry::u16(var::CAM_AWB_AWB_YSHIFT_PRE_ADJ, 0x003C),
    RegisterEntry::u16(var::CAM_AWB_AWB_WEIGHTS_0, 0x0000),
    RegisterEntry::u16(var::CAM_AWB_AWB_WEIGHTS_1, 0x0000),
    RegisterEntry::u16(var::CAM_AWB_AWB_WEIGHTS_2, 0x0000),
    RegisterEntry::u16(var::CAM_AWB_AWB_WEIGHTS_3, 0xE724),
    RegisterEntry::u16(var::CAM_AWB_AWB_WEIGHTS_4, 0x1583),
    RegisterEntry::u16(var::CAM_AWB_AWB_WEIGHTS_5, 0x2045),
    RegisterEntry::u16(var::CAM_AWB_AWB_WEIGHTS_6, 0x03FF),
    RegisterEntry::u16(var::CAM_AWB_AWB_WEIGHTS_7, 0x007C),
    RegisterEntry::u8(var::CAM_AWB_K_R_L, 0x80),
    RegisterEntry::u8(var::CAM_AWB_K_G_L, 0x80),
    RegisterEntry::u8(var::CAM_AWB_K_B_L, 0x80),
    RegisterEntry::u8(var::CAM_AWB_K_R_R, 0x88),
    RegisterEntry::u8(var::CAM_AWB_K_G_R, 0x80),
    RegisterEntry::u8(var::CAM_AWB_K_B_R, 0x80),
    RegisterEntry::END,
];

/// Low-light interpolation and AE targets.
pub const CPIPE_PREFERENCE: &[RegisterEntry] = &[
    RegisterEntry::u16(reg::LOGICAL_ADDRESS_ACCESS, 0x0000),
    RegisterEntry::u16(var::CAM_LL_START_BRIGHTNESS, 0x0020),
    RegisterEntry::u16(var::CAM_LL_STOP_BRIGHTNESS, 0x009A),
    RegisterEntry::u16(var::CAM_LL_START_GAIN_METRIC, 0x0070),
    RegisterEntry::u16(var::CAM_LL_STOP_GAIN_METRIC, 0x00F3),
    RegisterEntry::u16(var::CAM_LL_START_TARGET_LUMA_BM, 0x0020),
    RegisterEntry::u16(var::CAM_LL_STOP_TARGET_LUMA_BM, 0x009A),
    RegisterEntry::u8(var::CAM_LL_START_SATURATION, 0x80),
    RegisterEntry::u8(var::CAM_LL_END_SATURATION, 0x4B),
    RegisterEntry::u8(var::CAM_LL_START_DESATURATION, 0x00),
    RegisterEntry::u8(var::CAM_LL_END_DESATURATION, 0xFF),
    RegisterEntry::u8(var::CAM_LL_START_DEMOSAIC, 0x1E),
    RegisterEntry::u8(var::CAM_LL_START_AP_GAIN, 0x02),
    RegisterEntry::u8(var::CAM_LL_START_AP_THRESH, 0x06),
    RegisterEntry::u8(var::CAM_LL_STOP_DEMOSAIC, 0x3C),
    RegisterEntry::u8(var::CAM_LL_STOP_AP_GAIN, 0x01),
    RegisterEntry::u8(var::CAM_LL_STOP_AP_THRESH, 0x0C),
    RegisterEntry::u8(var::CAM_LL_START_NR_RED, 0x3C),
    RegisterEntry::u8(var::CAM_LL_START_NR_GREEN, 0x3C),
    RegisterEntry::u8(var::CAM_LL_START_NR_BLUE, 0x3C),
    RegisterEntry::u8(var::CAM_LL_START_NR_THRESH, 0x0F),
    RegisterEntry::u8(var::CAM_LL_STOP_NR_RED, 0x64),
    RegisterEntry::u8(var::CAM_LL_STOP_NR_GREEN, 0x64),
    RegisterEntry::u8(var::CAM_LL_STOP_NR_BLUE, 0x64),
    RegisterEntry::u8(var::CAM_LL_STOP_NR_THRESH, 0x32),
    RegisterEntry::u16(var::CAM_LL_START_CONTRAST_BM, 0x0020),
    RegisterEntry::u16(var::CAM_LL_STOP_CONTRAST_BM, 0x009A),
    RegisterEntry::u16(var::CAM_LL_GAMMA, 0x00DC),
    RegisterEntry::u8(var::CAM_LL_START_CONTRAST_GRADIENT, 0x38),
    RegisterEntry::u8(var::CAM_LL_STOP_CONTRAST_GRADIENT, 0x30),
    RegisterEntry::u8(var::CAM_LL_START_CONTRAST_LUMA_PERCENTAGE, 0x50),
    RegisterEntry::u8(var::CAM_LL_STOP_CONTRAST_LUMA_PERCENTAGE, 0x19),
    RegisterEntry::u16(var::CAM_LL_START_FADE_TO_BLACK_LUMA, 0x0230),
    RegisterEntry::u16(var::CAM_LL_STOP_FADE_TO_BLACK_LUMA, 0x0010),
    RegisterEntry::u16(var::CAM_LL_CLUSTER_DC_TH_BM, 0x0800),
    RegisterEntry::u8(var::CAM_LL_CLUSTER_DC_GATE_PERCENTAGE, 0x05),
    RegisterEntry::u8(var::CAM_LL_SUMMING_SENSITIVITY_FACTOR, 0x40),
    RegisterEntry::u8(var::CAM_AET_TARGET_AVERAGE_LUMA_DARK, 0x1B),
    RegisterEntry::u8(var::CAM_AET_AEMODE, 0x0E),
    RegisterEntry::u16(var::CAM_AET_TARGET_GAIN, 0x0080),
    RegisterEntry::u16(var::CAM_AET_AE_MAX_VIRT_AGAIN, 0x0100),
    RegisterEntry::u16(0xC81C, 0x01F8),
    RegisterEntry::u16(var::CAM_AET_BLACK_CLIPPING_TARGET, 0x005A),
    RegisterEntry::u8(var::CCM_DELTA_GAIN, 0x05),
    RegisterEntry::u8(var::AE_TRACK_AE_TRACKING_DAMPENING_SPEED, 0x20),
    RegisterEntry::END,
];

/// Power-on UVC defaults. AE and AWB are left enabled, so only variables
/// the firmware accepts while they run are touched here.
pub const UVC_SETTINGS: &[RegisterEntry] = &[
    RegisterEntry::u16(reg::LOGICAL_ADDRESS_ACCESS, 0x0000),
    RegisterEntry::u8(var::UVC_AE_MODE_CONTROL, 0x02),
    RegisterEntry::u8(var::UVC_WHITE_BALANCE_TEMPERATURE_AUTO_CONTROL, 0x01),
    RegisterEntry::u8(var::UVC_AE_PRIORITY_CONTROL, 0x00),
    RegisterEntry::u8(var::UVC_POWER_LINE_FREQUENCY_CONTROL, 0x02),
    RegisterEntry::u16(var::UVC_BACKLIGHT_COMPENSATION_CONTROL, 0x0001),
    RegisterEntry::u16(var::UVC_BRIGHTNESS_CONTROL, 0x0037),
    RegisterEntry::u16(var::UVC_CONTRAST_CONTROL, 0x0020),
    RegisterEntry::u16(var::UVC_HUE_CONTROL, 0x0000),
    RegisterEntry::u16(var::UVC_SATURATION_CONTROL, 0x0080),
    RegisterEntry::u16(var::UVC_SHARPNESS_CONTROL, 0x0000),
    RegisterEntry::u16(var::UVC_GAMMA_CONTROL, 0x00DC),
    RegisterEntry::u8(var::UVC_MANUAL_EXPOSURE_CONFIGURATION, 0x00),
    RegisterEntry::u8(var::UVC_FLICKER_AVOIDANCE_CONFIGURATION, 0x00),
    RegisterEntry::u16(var::UVC_ALGO, 0x0007),
    RegisterEntry::END,
];

pub const FEATURES: &[RegisterEntry] = &[
    RegisterEntry::u16(reg::LOGICAL_ADDRESS_ACCESS, 0x0000),
    RegisterEntry::u16(var::CAM_PORT_OUTPUT_CONTROL, 0x8040),
    RegisterEntry::u16(reg::PAD_SLEW, 0x0777),
    RegisterEntry::END,
];

pub const FMT_YUV422: &[RegisterEntry] = &[
    RegisterEntry::u16(reg::LOGICAL_ADDRESS_ACCESS, 0x0000),
    RegisterEntry::u16(var::CAM_OUTPUT_FORMAT, 0x000A),
    RegisterEntry::u8(var::CAM_OUTPUT_Y_OFFSET, 0x10),
    RegisterEntry::u16(var::CAM_OUTPUT_FORMAT_YUV, 0x001A),
    RegisterEntry::END,
];

pub const SIZE_1280X960: &[RegisterEntry] = &[
    RegisterEntry::u16(reg::LOGICAL_ADDRESS_ACCESS, 0x0000),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_Y_ADDR_START, 0x0004),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_X_ADDR_START, 0x0004),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_Y_ADDR_END, 0x03CB),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_X_ADDR_END, 0x050B),
    RegisterEntry::u32(var::CAM_SENSOR_CFG_PIXCLK, 0x02DC6C00),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_ROW_SPEED, 0x0001),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_FINE_INTEG_TIME_MIN, 0x00DB),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_FINE_INTEG_TIME_MAX, 0x05C8),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_FRAME_LENGTH_LINES, 0x03EF),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_LINE_LENGTH_PCK, 0x064B),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_FINE_CORRECTION, 0x0060),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_CPIPE_LAST_ROW, 0x03C3),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_REG_0_DATA, 0x0020),
    RegisterEntry::u16(var::CAM_CROP_WINDOW_XOFFSET, 0x0000),
    RegisterEntry::u16(var::CAM_CROP_WINDOW_YOFFSET, 0x0000),
    RegisterEntry::u16(var::CAM_CROP_WINDOW_WIDTH, 0x0500),
    RegisterEntry::u16(var::CAM_CROP_WINDOW_HEIGHT, 0x03C0),
    RegisterEntry::u8(var::CAM_CROP_CROPMODE, 0x03),
    RegisterEntry::u16(var::CAM_OUTPUT_WIDTH, 0x0500),
    RegisterEntry::u16(var::CAM_OUTPUT_HEIGHT, 0x03C0),
    RegisterEntry::u8(var::CAM_AET_AEMODE, 0x00),
    RegisterEntry::u16(var::CAM_STAT_AWB_CLIP_WINDOW_XSTART, 0x0000),
    RegisterEntry::u16(var::CAM_STAT_AWB_CLIP_WINDOW_YSTART, 0x0000),
    RegisterEntry::u16(var::CAM_STAT_AWB_CLIP_WINDOW_XEND, 0x04FF),
    RegisterEntry::u16(var::CAM_STAT_AWB_CLIP_WINDOW_YEND, 0x03BF),
    RegisterEntry::u16(var::CAM_STAT_AE_INITIAL_WINDOW_XSTART, 0x0000),
    RegisterEntry::u16(var::CAM_STAT_AE_INITIAL_WINDOW_YSTART, 0x0000),
    RegisterEntry::u16(var::CAM_STAT_AE_INITIAL_WINDOW_XEND, 0x00FF),
    RegisterEntry::u16(var::CAM_STAT_AE_INITIAL_WINDOW_YEND, 0x00BF),
    RegisterEntry::END,
];

pub const SIZE_1280X720: &[RegisterEntry] = &[
    RegisterEntry::u16(reg::LOGICAL_ADDRESS_ACCESS, 0x0000),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_Y_ADDR_START, 0x007C),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_X_ADDR_START, 0x0004),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_Y_ADDR_END, 0x0353),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_X_ADDR_END, 0x050B),
    RegisterEntry::u32(var::CAM_SENSOR_CFG_PIXCLK, 0x02DC6C00),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_ROW_SPEED, 0x0001),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_FINE_INTEG_TIME_MIN, 0x00DB),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_FINE_INTEG_TIME_MAX, 0x0616),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_FRAME_LENGTH_LINES, 0x030A),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_LINE_LENGTH_PCK, 0x0699),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_FINE_CORRECTION, 0x0060),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_CPIPE_LAST_ROW, 0x02D3),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_REG_0_DATA, 0x0020),
    RegisterEntry::u16(var::CAM_CROP_WINDOW_XOFFSET, 0x0000),
    RegisterEntry::u16(var::CAM_CROP_WINDOW_YOFFSET, 0x0000),
    RegisterEntry::u16(var::CAM_CROP_WINDOW_WIDTH, 0x0500),
    RegisterEntry::u16(var::CAM_CROP_WINDOW_HEIGHT, 0x02D0),
    RegisterEntry::u8(var::CAM_CROP_CROPMODE, 0x03),
    RegisterEntry::u16(var::CAM_OUTPUT_WIDTH, 0x0500),
    RegisterEntry::u16(var::CAM_OUTPUT_HEIGHT, 0x02D0),
    RegisterEntry::u8(var::CAM_AET_AEMODE, 0x00),
    RegisterEntry::u16(var::CAM_STAT_AWB_CLIP_WINDOW_XSTART, 0x0000),
    RegisterEntry::u16(var::CAM_STAT_AWB_CLIP_WINDOW_YSTART, 0x0000),
    RegisterEntry::u16(var::CAM_STAT_AWB_CLIP_WINDOW_XEND, 0x04FF),
    RegisterEntry::u16(var::CAM_STAT_AWB_CLIP_WINDOW_YEND, 0x02CF),
    RegisterEntry::u16(var::CAM_STAT_AE_INITIAL_WINDOW_XSTART, 0x0000),
    RegisterEntry::u16(var::CAM_STAT_AE_INITIAL_WINDOW_YSTART, 0x0000),
    RegisterEntry::u16(var::CAM_STAT_AE_INITIAL_WINDOW_XEND, 0x00FF),
    RegisterEntry::u16(var::CAM_STAT_AE_INITIAL_WINDOW_YEND, 0x008F),
    RegisterEntry::END,
];

pub const SIZE_640X480: &[RegisterEntry] = &[
    RegisterEntry::u16(reg::LOGICAL_ADDRESS_ACCESS, 0x0000),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_Y_ADDR_START, 0x0004),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_X_ADDR_START, 0x0004),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_Y_ADDR_END, 0x03CB),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_X_ADDR_END, 0x050B),
    RegisterEntry::u32(var::CAM_SENSOR_CFG_PIXCLK, 0x02DC6C00),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_ROW_SPEED, 0x0001),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_FINE_INTEG_TIME_MIN, 0x00DB),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_FINE_INTEG_TIME_MAX, 0x05B4),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_FRAME_LENGTH_LINES, 0x03EE),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_LINE_LENGTH_PCK, 0x0637),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_FINE_CORRECTION, 0x0060),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_CPIPE_LAST_ROW, 0x03C3),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_REG_0_DATA, 0x0020),
    RegisterEntry::u16(var::CAM_CROP_WINDOW_XOFFSET, 0x0000),
    RegisterEntry::u16(var::CAM_CROP_WINDOW_YOFFSET, 0x0000),
    RegisterEntry::u16(var::CAM_CROP_WINDOW_WIDTH, 0x0500),
    RegisterEntry::u16(var::CAM_CROP_WINDOW_HEIGHT, 0x03C0),
    RegisterEntry::u8(var::CAM_CROP_CROPMODE, 0x03),
    RegisterEntry::u16(var::CAM_OUTPUT_WIDTH, 0x0280),
    RegisterEntry::u16(var::CAM_OUTPUT_HEIGHT, 0x01E0),
    RegisterEntry::u8(var::CAM_AET_AEMODE, 0x00),
    RegisterEntry::u16(var::CAM_STAT_AWB_CLIP_WINDOW_XSTART, 0x0000),
    RegisterEntry::u16(var::CAM_STAT_AWB_CLIP_WINDOW_YSTART, 0x0000),
    RegisterEntry::u16(var::CAM_STAT_AWB_CLIP_WINDOW_XEND, 0x027F),
    RegisterEntry::u16(var::CAM_STAT_AWB_CLIP_WINDOW_YEND, 0x01DF),
    RegisterEntry::u16(var::CAM_STAT_AE_INITIAL_WINDOW_XSTART, 0x0000),
    RegisterEntry::u16(var::CAM_STAT_AE_INITIAL_WINDOW_YSTART, 0x0000),
    RegisterEntry::u16(var::CAM_STAT_AE_INITIAL_WINDOW_XEND, 0x007F),
    RegisterEntry::u16(var::CAM_STAT_AE_INITIAL_WINDOW_YEND, 0x005F),
    RegisterEntry::END,
];

pub const SIZE_320X240: &[RegisterEntry] = &[
    RegisterEntry::u16(reg::LOGICAL_ADDRESS_ACCESS, 0x0000),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_Y_ADDR_START, 0x0004),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_X_ADDR_START, 0x0004),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_Y_ADDR_END, 0x03CB),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_X_ADDR_END, 0x050B),
    RegisterEntry::u32(var::CAM_SENSOR_CFG_PIXCLK, 0x02DC6C00),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_ROW_SPEED, 0x0001),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_FINE_INTEG_TIME_MIN, 0x00DB),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_FINE_INTEG_TIME_MAX, 0x05B4),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_FRAME_LENGTH_LINES, 0x03EE),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_LINE_LENGTH_PCK, 0x0637),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_FINE_CORRECTION, 0x0060),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_CPIPE_LAST_ROW, 0x03C3),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_REG_0_DATA, 0x0020),
    RegisterEntry::u16(var::CAM_CROP_WINDOW_XOFFSET, 0x0000),
    RegisterEntry::u16(var::CAM_CROP_WINDOW_YOFFSET, 0x0000),
    RegisterEntry::u16(var::CAM_CROP_WINDOW_WIDTH, 0x0500),
    RegisterEntry::u16(var::CAM_CROP_WINDOW_HEIGHT, 0x03C0),
    RegisterEntry::u8(var::CAM_CROP_CROPMODE, 0x03),
    RegisterEntry::u16(var::CAM_OUTPUT_WIDTH, 0x0140),
    RegisterEntry::u16(var::CAM_OUTPUT_HEIGHT, 0x00F0),
    RegisterEntry::u8(var::CAM_AET_AEMODE, 0x00),
    RegisterEntry::u16(var::CAM_STAT_AWB_CLIP_WINDOW_XSTART, 0x0000),
    RegisterEntry::u16(var::CAM_STAT_AWB_CLIP_WINDOW_YSTART, 0x0000),
    RegisterEntry::u16(var::CAM_STAT_AWB_CLIP_WINDOW_XEND, 0x013F),
    RegisterEntry::u16(var::CAM_STAT_AWB_CLIP_WINDOW_YEND, 0x00EF),
    RegisterEntry::u16(var::CAM_STAT_AE_INITIAL_WINDOW_XSTART, 0x0000),
    RegisterEntry::u16(var::CAM_STAT_AE_INITIAL_WINDOW_YSTART, 0x0000),
    RegisterEntry::u16(var::CAM_STAT_AE_INITIAL_WINDOW_XEND, 0x003F),
    RegisterEntry::u16(var::CAM_STAT_AE_INITIAL_WINDOW_YEND, 0x002F),
    RegisterEntry::END,
];

pub const SIZE_160X120: &[RegisterEntry] = &[
    RegisterEntry::u16(reg::LOGICAL_ADDRESS_ACCESS, 0x0000),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_Y_ADDR_START, 0x0004),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_X_ADDR_START, 0x0004),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_Y_ADDR_END, 0x03CB),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_X_ADDR_END, 0x050B),
    RegisterEntry::u32(var::CAM_SENSOR_CFG_PIXCLK, 0x02DC6C00),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_ROW_SPEED, 0x0001),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_FINE_INTEG_TIME_MIN, 0x00DB),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_FINE_INTEG_TIME_MAX, 0x05B4),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_FRAME_LENGTH_LINES, 0x03EE),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_LINE_LENGTH_PCK, 0x0637),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_FINE_CORRECTION, 0x0060),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_CPIPE_LAST_ROW, 0x03C3),
    RegisterEntry::u16(var::CAM_SENSOR_CFG_REG_0_DATA, 0x0020),
    RegisterEntry::u16(var::CAM_CROP_WINDOW_XOFFSET, 0x0000),
    RegisterEntry::u16(var::CAM_CROP_WINDOW_YOFFSET, 0x0000),
    RegisterEntry::u16(var::CAM_CROP_WINDOW_WIDTH, 0x0500),
    RegisterEntry::u16(var::CAM_CROP_WINDOW_HEIGHT, 0x03C0),
    RegisterEntry::u8(var::CAM_CROP_CROPMODE, 0x03),
    RegisterEntry::u16(var::CAM_OUTPUT_WIDTH, 0x00A0),
    RegisterEntry::u16(var::CAM_OUTPUT_HEIGHT, 0x0078),
    RegisterEntry::u8(var::CAM_AET_AEMODE, 0x00),
    RegisterEntry::u16(var::CAM_STAT_AWB_CLIP_WINDOW_XSTART, 0x0000),
    RegisterEntry::u16(var::CAM_STAT_AWB_CLIP_WINDOW_YSTART, 0x0000),
    RegisterEntry::u16(var::CAM_STAT_AWB_CLIP_WINDOW_XEND, 0x009F),
    RegisterEntry::u16(var::CAM_STAT_AWB_CLIP_WINDOW_YEND, 0x0077),
    RegisterEntry::u16(var::CAM_STAT_AE_INITIAL_WINDOW_XSTART, 0x0000),
    RegisterEntry::u16(var::CAM_STAT_AE_INITIAL_WINDOW_YSTART, 0x0000),
    RegisterEntry::u16(var::CAM_STAT_AE_INITIAL_WINDOW_XEND, 0x001F),
    RegisterEntry::u16(var::CAM_STAT_AE_INITIAL_WINDOW_YEND, 0x0017),
    RegisterEntry::END,
];

static BLACK_LEVEL_CORRECTION_FIX: [u16; 150] = [
    0x70cf, 0xffff, 0xc5d4, 0x903a, 0x2144, 0x0c00, 0x2186, 0x0ff3,
    0xb844, 0xb948, 0xe082, 0x20cc, 0x80e2, 0x21cc, 0x80a2, 0x21cc,
    0x80e2, 0xf404, 0xd801, 0xf003, 0xd800, 0x7ee0, 0xc0f1, 0x08ba,
    0x0600, 0xc1a1, 0x76cf, 0xffff, 0xc130, 0x6e04, 0xc040, 0x71cf,
    0xffff, 0xc790, 0x8103, 0x77cf, 0xffff, 0xc7c0, 0xe001, 0xa103,
    0xd800, 0x0c6a, 0x04e0, 0xb89e, 0x7508, 0x8e1c, 0x0809, 0x0191,
    0xd801, 0xae1d, 0xe580, 0x20ca, 0x0022, 0x20cf, 0x0522, 0x0c5c,
    0x04e2, 0x21ca, 0x0062, 0xe580, 0xd901, 0x79c0, 0xd800, 0x0be6,
    0x04e0, 0xb89e, 0x70cf, 0xffff, 0xc8d4, 0x9002, 0x0857, 0x025e,
    0xffdc, 0xe080, 0x25cc, 0x9022, 0xf225, 0x1700, 0x108a, 0x73cf,
    0xff00, 0x3174, 0x9307, 0x2a04, 0x103e, 0x9328, 0x2942, 0x7140,
    0x2a04, 0x107e, 0x9349, 0x2942, 0x7141, 0x2a04, 0x10be, 0x934a,
    0x2942, 0x714b, 0x2a04, 0x10be, 0x130c, 0x010a, 0x2942, 0x7142,
    0x2250, 0x13ca, 0x1b0c, 0x0284, 0xb307, 0xb328, 0x1b12, 0x02c4,
    0xb34a, 0xed88, 0x71cf, 0xff00, 0x3174, 0x9106, 0xb88f, 0xb106,
    0x210a, 0x8340, 0xc000, 0x21ca, 0x0062, 0x20f0, 0x0040, 0x0b02,
    0x0320, 0xd901, 0x07f1, 0x05e0, 0xc0a1, 0x78e0, 0xc0f1, 0x71cf,
    0xffff, 0xc7c0, 0xd840, 0xa900, 0x71cf, 0xffff, 0xd02c, 0xd81e,
    0x0a5a, 0x04e0, 0xda00, 0xd800, 0xc0d1, 0x7ee0,
];

static ADAPTIVE_SENSITIVITY: [u16; 514] = [
    0x70cf, 0xffff, 0xc5d4, 0x903a, 0x2144, 0x0c00, 0x2186, 0x0ff3,
    0xb844, 0x262f, 0xf008, 0xb948, 0x21cc, 0x8021, 0xd801, 0xf203,
    0xd800, 0x7ee0, 0xc0f1, 0x71cf, 0xffff, 0xc610, 0x910e, 0x208c,
    0x8014, 0xf418, 0x910f, 0x208c, 0x800f, 0xf414, 0x9116, 0x208c,
    0x800a, 0xf410, 0x9117, 0x208c, 0x8807, 0xf40c, 0x9118, 0x2086,
    0x0ff3, 0xb848, 0x080d, 0x0090, 0xffea, 0xe081, 0xd801, 0xf203,
    0xd800, 0xc0d1, 0x7ee0, 0x78e0, 0xc0f1, 0x71cf, 0xffff, 0xc610,
    0x910e, 0x208c, 0x800a, 0xf418, 0x910f, 0x208c, 0x8807, 0xf414,
    0x9116, 0x208c, 0x800a, 0xf410, 0x9117, 0x208c, 0x8807, 0xf40c,
    0x9118, 0x2086, 0x0ff3, 0xb848, 0x080d, 0x0090, 0xffd9, 0xe080,
    0xd801, 0xf203, 0xd800, 0xf1df, 0x9040, 0x71cf, 0xffff, 0xc5d4,
    0xb15a, 0x9041, 0x73cf, 0xffff, 0xc7d0, 0xb140, 0x9042, 0xb141,
    0x9043, 0xb142, 0x9044, 0xb143, 0x9045, 0xb147, 0x9046, 0xb148,
    0x9047, 0xb14b, 0x9048, 0xb14c, 0x9049, 0x1958, 0x0084, 0x904a,
    0x195a, 0x0084, 0x8856, 0x1b36, 0x8082, 0x8857, 0x1b37, 0x8082,
    0x904c, 0x19a7, 0x009c, 0x881a, 0x7fe0, 0x1b54, 0x8002, 0x78e0,
    0x71cf, 0xffff, 0xc350, 0xd828, 0xa90b, 0x8100, 0x01c5, 0x0320,
    0xd900, 0x78e0, 0x220a, 0x1f80, 0xffff, 0xd4e0, 0xc0f1, 0x0811,
    0x0051, 0x2240, 0x1200, 0xffe1, 0xd801, 0xf006, 0x2240, 0x1900,
    0xffde, 0xd802, 0x1a05, 0x1002, 0xfff2, 0xf195, 0xc0f1, 0x0e7e,
    0x05c0, 0x75cf, 0xffff, 0xc84c, 0x9502, 0x77cf, 0xffff, 0xc344,
    0x2044, 0x008e, 0xb8a1, 0x0926, 0x03e0, 0xb502, 0x9502, 0x952e,
    0x7e05, 0xb5c2, 0x70cf, 0xffff, 0xc610, 0x099a, 0x04a0, 0xb026,
    0x0e02, 0x0560, 0xde00, 0x0a12, 0x0320, 0xb7c4, 0x0b36, 0x03a0,
    0x70c9, 0x9502, 0x7608, 0xb8a8, 0xb502, 0x70cf, 0x0000, 0x5536,
    0x7860, 0x2686, 0x1ffb, 0x9502, 0x78c5, 0x0631, 0x05e0, 0xb502,
    0x72cf, 0xffff, 0xc5d4, 0x923a, 0x73cf, 0xffff, 0xc7d0, 0xb020,
    0x9220, 0xb021, 0x9221, 0xb022, 0x9222, 0xb023, 0x9223, 0xb024,
    0x9227, 0xb025, 0x9228, 0xb026, 0x922b, 0xb027, 0x922c, 0xb028,
    0x1258, 0x0101, 0xb029, 0x125a, 0x0101, 0xb02a, 0x1336, 0x8081,
    0xa836, 0x1337, 0x8081, 0xa837, 0x12a7, 0x0701, 0xb02c, 0x1354,
    0x8081, 0x7fe0, 0xa83a, 0x78e0, 0xc0f1, 0x0dc2, 0x05c0, 0x7608,
    0x09bb, 0x0010, 0x75cf, 0xffff, 0xd4e0, 0x8d21, 0x8d00, 0x2153,
    0x0003, 0xb8c0, 0x8d45, 0x0b23, 0x0000, 0xea8f, 0x0915, 0x001e,
    0xff81, 0xe808, 0x2540, 0x1900, 0xffde, 0x8d00, 0xb880, 0xf004,
    0x8d00, 0xb8a0, 0xad00, 0x8d05, 0xe081, 0x20cc, 0x80a2, 0xdf00,
    0xf40a, 0x71cf, 0xffff, 0xc84c, 0x9102, 0x7708, 0xb8a6, 0x2786,
    0x1ffe, 0xb102, 0x0b42, 0x0180, 0x0e3e, 0x0180, 0x0f4a, 0x0160,
    0x70c9, 0x8d05, 0xe081, 0x20cc, 0x80a2, 0xf429, 0x76cf, 0xffff,
    0xc84c, 0x082d, 0x0051, 0x70cf, 0xffff, 0xc90c, 0x8805, 0x09b6,
    0x0360, 0xd908, 0x2099, 0x0802, 0x9634, 0xb503, 0x7902, 0x1523,
    0x1080, 0xb634, 0xe001, 0x1d23, 0x1002, 0xf00b, 0x9634, 0x9503,
    0x6038, 0xb614, 0x153f, 0x1080, 0xe001, 0x1d3f, 0x1002, 0xffa4,
    0x9602, 0x7f05, 0xd800, 0xb6e2, 0xad05, 0x0511, 0x05e0, 0xd800,
    0xc0f1, 0x0cfe, 0x05c0, 0x0a96, 0x05a0, 0x7608, 0x0c22, 0x0240,
    0xe080, 0x20ca, 0x0f82, 0x0000, 0x190b, 0x0c60, 0x05a2, 0x21ca,
    0x0022, 0x0c56, 0x0240, 0xe806, 0x0e0e, 0x0220, 0x70c9, 0xf048,
    0x0896, 0x0440, 0x0e96, 0x0400, 0x0966, 0x0380, 0x75cf, 0xffff,
    0xd4e0, 0x8d00, 0x084d, 0x001e, 0xff47, 0x080d, 0x0050, 0xff57,
    0x0841, 0x0051, 0x8d04, 0x9521, 0xe064, 0x790c, 0x702f, 0x0ce2,
    0x05e0, 0xd964, 0x72cf, 0xffff, 0xc700, 0x9235, 0x0811, 0x0043,
    0xff3d, 0x080d, 0x0051, 0xd801, 0xff77, 0xf025, 0x9501, 0x9235,
    0x0911, 0x0003, 0xff49, 0x080d, 0x0051, 0xd800, 0xff72, 0xf01b,
    0x0886, 0x03e0, 0xd801, 0x0ef6, 0x03c0, 0x0f52, 0x0340, 0x0dba,
    0x0200, 0x0af6, 0x0440, 0x0c22, 0x0400, 0x0d72, 0x0440, 0x0dc2,
    0x0200, 0x0972, 0x0440, 0x0d3a, 0x0220, 0xd820, 0x0bfa, 0x0260,
    0x70c9, 0x0451, 0x05c0, 0x78e0, 0xd900, 0xf00a, 0x70cf, 0xffff,
    0xd520, 0x7835, 0x8041, 0x8000, 0xe102, 0xa040, 0x09f1, 0x8114,
    0x71cf, 0xffff, 0xd4e0, 0x70cf, 0xffff, 0xc594, 0xb03a, 0x7fe0,
    0xd800, 0x0000, 0x0000, 0x0500, 0x0500, 0x0200, 0x0330, 0x0000,
    0x0000, 0x03cd, 0x050d, 0x01c5, 0x03b3, 0x00e0, 0x01e3, 0x0280,
    0x01e0, 0x0109, 0x0080, 0x0500, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0xffff, 0xc9b4, 0xffff, 0xd324, 0xffff, 0xca34,
    0xffff, 0xd3ec,
];
