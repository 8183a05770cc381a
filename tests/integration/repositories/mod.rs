// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod license_repository_test;
pub mod shareable_link_repository_test;
pub mod team_repository_test;
pub mod webhook_event_repository_test;
