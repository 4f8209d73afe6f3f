#![doc = include_str!("../README.md")]

/*
 * savour-api - recipe persistence for the Savour cookbook.
 * Copyright (C) 2024  savour contributors
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see https://www.gnu.org/licenses.
 */

pub mod database;
pub mod http;
pub mod recipes;

mod util;

#[cfg(test)]
mod testing;
