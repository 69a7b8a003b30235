//! Active model factories shared by fixtures and tests.

use chrono::Utc;
use sea_orm::ActiveValue;

/// Officer with the given rarity and cost, and no optional details
pub fn officer(id: i32, name: &str, rarity: i32, cost: Option<i32>) -> entity::officer::ActiveModel {
    entity::officer::ActiveModel {
        id: ActiveValue::Set(id),
        name: ActiveValue::Set(name.to_string()),
        rarity: ActiveValue::Set(rarity),
        cost: ActiveValue::Set(cost),
        faction: ActiveValue::Set(None),
        house: ActiveValue::Set(None),
        inherent_skill_name: ActiveValue::Set(None),
        inherent_skill_type: ActiveValue::Set(None),
        inheritable_skill_name: ActiveValue::Set(None),
        trait1: ActiveValue::Set(None),
        trait2: ActiveValue::Set(None),
    }
}

/// General skill inherited through the given officers
pub fn skill(
    id: i32,
    name: &str,
    inherit1_name: Option<&str>,
    inherit2_name: Option<&str>,
) -> entity::skill::ActiveModel {
    entity::skill::ActiveModel {
        id: ActiveValue::Set(id),
        name: ActiveValue::Set(name.to_string()),
        category: ActiveValue::Set(Some("指揮".to_string())),
        trigger_rate: ActiveValue::Set(Some(35.0)),
        owner_name: ActiveValue::Set(None),
        description: ActiveValue::Set(None),
        inherit1_name: ActiveValue::Set(inherit1_name.map(str::to_string)),
        inherit2_name: ActiveValue::Set(inherit2_name.map(str::to_string)),
    }
}

/// Skill bound to `owner_name`, excluded from general pools
pub fn exclusive_skill(id: i32, name: &str, owner_name: &str) -> entity::skill::ActiveModel {
    entity::skill::ActiveModel {
        owner_name: ActiveValue::Set(Some(owner_name.to_string())),
        ..skill(id, name, None, None)
    }
}

pub fn formation(owner: &str, advisor: &str, label: &str) -> entity::formation::ActiveModel {
    let now = Utc::now().naive_utc();

    entity::formation::ActiveModel {
        owner_key: ActiveValue::Set(owner.to_string()),
        advisor_key: ActiveValue::Set(advisor.to_string()),
        label: ActiveValue::Set(label.to_string()),
        request_comment: ActiveValue::Set(None),
        answer_comment: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
}
