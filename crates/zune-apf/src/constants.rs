/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

// width + height + homogeneous flag + packed length
pub const APF_MASK_HEADER_SIZE: usize = 4 + 4 + 1 + 4;
// format + background + default color + color count
pub const APF_COLOR_HEADER_SIZE: usize = 4 * 4;

pub const APF_EXTENSION: &str = "apf";

/// Deflate level used when nothing else is configured, equivalent
/// to the "optimal" setting of most deflate implementations
pub const APF_DEFAULT_COMPRESSION_LEVEL: u32 = 9;
pub const APF_MAX_COMPRESSION_LEVEL: u32 = 9;
