// SPDX-License-Identifier: MIT

pub mod fixtures;
