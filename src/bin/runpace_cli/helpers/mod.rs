// ABOUTME: Helper modules for runpace-cli
// ABOUTME: Output formatting shared by every subcommand
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RunPace Pro

pub mod display;
