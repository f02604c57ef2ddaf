use super::base_entity::soft_delete_column;
use crate::SoftDeleteEntity;
use chrono::{DateTime, Local, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ColumnType, DbErr, EntityName, Value};

/// How a timestamp is represented by the soft delete column
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TimestampKind {
    Naive,
    Utc,
    Local,
    FixedOffset,
}

impl TimestampKind {
    const ALL: [Self; 4] = [Self::Utc, Self::FixedOffset, Self::Naive, Self::Local];

    fn of_value(value: &Value) -> Option<Self> {
        match value {
            Value::ChronoDateTime(_) => Some(Self::Naive),
            Value::ChronoDateTimeUtc(_) => Some(Self::Utc),
            Value::ChronoDateTimeLocal(_) => Some(Self::Local),
            Value::ChronoDateTimeWithTimeZone(_) => Some(Self::FixedOffset),
            _ => None,
        }
    }

    fn of_column_type(col_type: &ColumnType) -> Option<Self> {
        match col_type {
            ColumnType::DateTime | ColumnType::Timestamp => Some(Self::Naive),
            ColumnType::TimestampWithTimeZone => Some(Self::Utc),
            _ => None,
        }
    }

    fn value(self, at: Option<DateTime<Utc>>) -> Value {
        match self {
            Self::Naive => at.map(|t| t.naive_utc()).into(),
            Self::Utc => at.into(),
            Self::Local => at.map(|t| t.with_timezone(&Local)).into(),
            Self::FixedOffset => at.map(|t| t.fixed_offset()).into(),
        }
    }
}

/// Whether a value of the soft delete column counts as set
pub(crate) fn is_timestamp_set(value: &Value) -> bool {
    match value {
        Value::ChronoDateTime(v) => v.is_some(),
        Value::ChronoDateTimeUtc(v) => v.is_some(),
        Value::ChronoDateTimeLocal(v) => v.is_some(),
        Value::ChronoDateTimeWithTimeZone(v) => v.is_some(),
        _ => false,
    }
}

/// Write `at` (or NULL) into the soft delete column of `record`.
///
/// The value keeps the chrono type the column already holds. An unset column is
/// tried with each chrono type in turn, starting from the one its `ColumnType`
/// suggests, until the field accepts one.
pub(crate) fn stamp<A>(record: &mut A, at: Option<DateTime<Utc>>) -> Result<(), DbErr>
where
    A: ActiveModelTrait,
    A::Entity: SoftDeleteEntity,
{
    let column = soft_delete_column::<A::Entity>()?;
    let preferred = match record.get(column) {
        ActiveValue::Set(v) | ActiveValue::Unchanged(v) => TimestampKind::of_value(&v),
        ActiveValue::NotSet => TimestampKind::of_column_type(column.def().get_column_type()),
    };
    for kind in preferred.into_iter().chain(TimestampKind::ALL) {
        if record.try_set(column, kind.value(at)).is_ok() {
            return Ok(());
        }
    }
    Err(DbErr::Type(format!(
        "Soft delete column `{}` of `{}` is not a timestamp",
        <A::Entity as SoftDeleteEntity>::soft_delete_column(),
        A::Entity::default().table_name()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests_cfg::*;
    use chrono::{NaiveDateTime, TimeZone};
    use pretty_assertions::assert_eq;
    use sea_orm::{ActiveModelBehavior, Set};

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn value_kinds() {
        let at = Some(noon());
        assert_eq!(
            TimestampKind::Naive.value(at),
            Value::from(noon().naive_utc())
        );
        assert_eq!(TimestampKind::Utc.value(at), Value::from(noon()));
        assert_eq!(
            TimestampKind::FixedOffset.value(at),
            Value::from(noon().fixed_offset())
        );
        assert_eq!(
            TimestampKind::Local.value(at),
            Value::from(noon().with_timezone(&Local))
        );
        assert_eq!(
            TimestampKind::Utc.value(None),
            Value::from(None::<DateTime<Utc>>)
        );
        assert_eq!(
            TimestampKind::Naive.value(None),
            Value::from(None::<NaiveDateTime>)
        );
    }

    #[test]
    fn timestamp_set() {
        assert!(is_timestamp_set(&noon().into()));
        assert!(is_timestamp_set(&noon().naive_utc().into()));
        assert!(is_timestamp_set(&noon().with_timezone(&Local).into()));
        assert!(is_timestamp_set(&noon().fixed_offset().into()));
        assert!(!is_timestamp_set(&None::<DateTime<Utc>>.into()));
        assert!(!is_timestamp_set(&Value::from("2024-05-01 12:00:00")));
    }

    #[test]
    fn stamp_keeps_value_type() {
        let mut record = post::ActiveModel {
            id: Set(1),
            title: Set("Hello".to_owned()),
            deleted_at: Set(None),
        };
        stamp(&mut record, Some(noon())).unwrap();
        assert_eq!(record.deleted_at, Set(Some(noon())));

        stamp(&mut record, None).unwrap();
        assert_eq!(record.deleted_at, Set(None));
    }

    #[test]
    fn stamp_not_set_column() {
        let mut record = note::ActiveModel::new();
        stamp(&mut record, Some(noon())).unwrap();
        assert_eq!(record.soft_deleted_at, Set(Some(noon().naive_utc())));
    }

    #[test]
    fn stamp_missing_column() {
        let mut record = comment::ActiveModel::new();
        assert!(matches!(stamp(&mut record, Some(noon())), Err(DbErr::Custom(_))));
    }

    #[test]
    fn stamp_not_set_column_with_time_zone() {
        let mut record = task::ActiveModel {
            id: Set(1),
            ..Default::default()
        };
        stamp(&mut record, Some(noon())).unwrap();
        assert_eq!(record.deleted_at, Set(Some(noon().fixed_offset())));

        let mut record = task::ActiveModel::new();
        stamp(&mut record, None).unwrap();
        assert_eq!(record.deleted_at, Set(None));
    }

    #[test]
    fn stamp_not_set_local_column() {
        let mut record = reminder::ActiveModel {
            id: Set(1),
            ..Default::default()
        };
        stamp(&mut record, Some(noon())).unwrap();
        assert_eq!(
            record.soft_deleted_at,
            Set(Some(noon().with_timezone(&Local)))
        );
        assert!(is_timestamp_set(&record.soft_deleted_at.into_value().unwrap()));
    }
}
