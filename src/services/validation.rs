use crate::error::ValidationError;
use crate::form::FormState;
use crate::models::{CycleUnit, GroupParams, GroupType};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Smallest group size for any group type
pub const MIN_MEMBERS: i64 = 2;

/// Shortest contribution cycle
pub const MIN_CYCLE_DURATION: i64 = 1;

/// Run every rule in order and return the typed parameters.
///
/// Rules short-circuit on the first failure:
/// 1. group name present after trimming
/// 2. max members is an integer >= 2
/// 3. max members within the group type's ceiling
/// 4. contribution amount is a decimal > 0
/// 5. cycle duration is an integer >= 1 that fits in a `u32`
/// 6. cycle unit present and known
/// 7. private groups have at least one invitee
/// 8. an enabled lock has a decimal amount >= 0
/// 9. minimum reputation is a non-negative integer
pub fn check_form(form: &FormState) -> Result<GroupParams, ValidationError> {
    let data = form.data();
    let group_type = form.group_type();

    let group_name = data.group_name.trim();
    if group_name.is_empty() {
        return Err(ValidationError::GroupNameRequired);
    }

    let ceiling_error = match group_type {
        GroupType::Public => ValidationError::PublicMemberCeiling,
        GroupType::Private => ValidationError::PrivateMemberCeiling,
    };
    let max_members = match parse_integer(&data.max_members) {
        IntegerInput::Value(n) if n >= MIN_MEMBERS => n,
        IntegerInput::TooLarge => return Err(ceiling_error),
        _ => return Err(ValidationError::TooFewMembers),
    };

    if max_members > i64::from(group_type.member_ceiling()) {
        return Err(ceiling_error);
    }

    let contribution_amount = parse_decimal(&data.contribution_amount)
        .filter(|amount| *amount > Decimal::ZERO)
        .ok_or(ValidationError::InvalidContribution)?;

    let cycle_duration = match parse_integer(&data.cycle_duration) {
        IntegerInput::Value(n) if n >= MIN_CYCLE_DURATION => {
            u32::try_from(n).map_err(|_| ValidationError::CycleDurationTooLarge)?
        }
        IntegerInput::TooLarge => return Err(ValidationError::CycleDurationTooLarge),
        _ => return Err(ValidationError::InvalidCycleDuration),
    };

    let cycle_unit =
        CycleUnit::from_str(&data.cycle_unit).map_err(|_| ValidationError::CycleUnitRequired)?;

    if group_type.requires_invitations() && form.invited_members().is_empty() {
        return Err(ValidationError::InvitationsRequired);
    }

    let lock = form.lock();
    let lock_amount = if lock.lock_enabled {
        parse_decimal(&lock.lock_amount)
            .filter(|amount| *amount >= Decimal::ZERO)
            .ok_or(ValidationError::InvalidLockAmount)?
    } else {
        Decimal::ZERO
    };

    let min_reputation = match data.min_reputation.trim() {
        "" => 0,
        raw => raw
            .parse::<u64>()
            .map_err(|_| ValidationError::InvalidReputation)?,
    };

    Ok(GroupParams {
        group_name: group_name.to_string(),
        description: data.description.clone(),
        // bounded by the ceiling check above
        max_members: max_members as u32,
        contribution_amount,
        cycle_duration,
        cycle_unit,
        lock_enabled: lock.lock_enabled,
        lock_amount,
        selected_token: form.selected_token(),
        min_reputation,
    })
}

/// Integer form input, keeping "too many digits" apart from "not a number"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IntegerInput {
    Value(i64),
    TooLarge,
    Invalid,
}

fn parse_integer(raw: &str) -> IntegerInput {
    let raw = raw.trim();
    if let Ok(n) = raw.parse::<i64>() {
        return IntegerInput::Value(n);
    }

    let digits = raw.strip_prefix('+').unwrap_or(raw);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        IntegerInput::TooLarge
    } else {
        IntegerInput::Invalid
    }
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw.trim()).ok()
}
