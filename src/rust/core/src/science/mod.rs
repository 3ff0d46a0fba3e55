// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
pub mod factors;
pub mod home;
pub mod impact; // Dashboard indices from prediction history
pub mod insights;
pub mod lifestyle;
pub mod profiles;
pub mod rating; // Aggregator + rating buckets
pub mod travel;
