//! Merge-on-empty for partial employee updates

use shared::models::{Department, Employee, Passport};

fn pick_str(incoming: &str, stored: &str) -> String {
    let picked = if incoming.is_empty() { stored } else { incoming };
    picked.to_string()
}

fn pick_id(incoming: i32, stored: i32) -> i32 {
    if incoming == 0 { stored } else { incoming }
}

/// Overlay `patch` on `stored`: a zero/empty scalar in `patch` keeps the
/// stored value, anything else overwrites it.
///
/// The id always comes from `stored`. When the department id is replaced,
/// the returned department carries only the new id and company; its
/// name/phone are re-read from the store.
pub fn merge_on_empty(stored: &Employee, patch: &Employee) -> Employee {
    let company_id = pick_id(patch.company_id, stored.company_id);

    let department = if patch.department.id == 0 || patch.department.id == stored.department.id {
        stored.department.clone()
    } else {
        Department {
            id: patch.department.id,
            company_id,
            ..Department::default()
        }
    };

    Employee {
        id: stored.id,
        name: pick_str(&patch.name, &stored.name),
        surname: pick_str(&patch.surname, &stored.surname),
        phone: pick_str(&patch.phone, &stored.phone),
        company_id,
        passport: Passport {
            kind: pick_str(&patch.passport.kind, &stored.passport.kind),
            number: pick_str(&patch.passport.number, &stored.passport.number),
        },
        department,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn stored() -> Employee {
        Employee {
            id: 1,
            name: "katya".into(),
            surname: "ivanova".into(),
            phone: "93097383".into(),
            company_id: 1,
            passport: Passport {
                kind: "RF".into(),
                number: "7878 898989".into(),
            },
            department: Department {
                id: 3,
                name: "dev".into(),
                phone: "1234".into(),
                company_id: 1,
            },
        }
    }

    #[test]
    fn test_empty_patch_keeps_everything() {
        let merged = merge_on_empty(&stored(), &Employee::default());
        assert_eq!(merged, stored());
    }

    #[test]
    fn test_only_phone_changes() {
        let patch = Employee {
            phone: "555".into(),
            ..Employee::default()
        };
        let merged = merge_on_empty(&stored(), &patch);
        assert_eq!(merged.phone, "555");
        assert_eq!(merged.name, "katya");
        assert_eq!(merged.passport, stored().passport);
        assert_eq!(merged.department, stored().department);
    }

    #[test]
    fn test_passport_type_and_number_merge_independently() {
        let patch = Employee {
            passport: Passport {
                kind: "RB".into(),
                number: String::new(),
            },
            ..Employee::default()
        };
        let merged = merge_on_empty(&stored(), &patch);
        assert_eq!(merged.passport.kind, "RB");
        assert_eq!(merged.passport.number, "7878 898989");
    }

    #[test]
    fn test_department_switch() {
        let patch = Employee {
            department: Department {
                id: 7,
                ..Department::default()
            },
            ..Employee::default()
        };
        let merged = merge_on_empty(&stored(), &patch);
        assert_eq!(merged.department.id, 7);
        assert_eq!(merged.department.company_id, 1);
    }

    #[test]
    fn test_id_comes_from_stored_row() {
        let patch = Employee {
            id: 99,
            ..Employee::default()
        };
        assert_eq!(merge_on_empty(&stored(), &patch).id, 1);
    }

    fn text() -> impl Strategy<Value = String> {
        prop_oneof![Just(String::new()), "[a-z0-9 ]{1,12}"]
    }

    fn id() -> impl Strategy<Value = i32> {
        prop_oneof![Just(0), 1..10_000i32]
    }

    prop_compose! {
        fn employee()(
            name in text(), surname in text(), phone in text(),
            company_id in id(), department_id in id(),
            kind in text(), number in text(),
        ) -> Employee {
            Employee {
                id: 1,
                name,
                surname,
                phone,
                company_id,
                passport: Passport { kind, number },
                department: Department { id: department_id, company_id, ..Department::default() },
            }
        }
    }

    proptest! {
        #[test]
        fn prop_field_is_patch_unless_zero(stored in employee(), patch in employee()) {
            let merged = merge_on_empty(&stored, &patch);

            let expect_str = |p: &str, s: &str| if p.is_empty() { s.to_string() } else { p.to_string() };
            let expect_id = |p: i32, s: i32| if p == 0 { s } else { p };

            prop_assert_eq!(merged.name, expect_str(&patch.name, &stored.name));
            prop_assert_eq!(merged.surname, expect_str(&patch.surname, &stored.surname));
            prop_assert_eq!(merged.phone, expect_str(&patch.phone, &stored.phone));
            prop_assert_eq!(merged.company_id, expect_id(patch.company_id, stored.company_id));
            prop_assert_eq!(merged.passport.kind, expect_str(&patch.passport.kind, &stored.passport.kind));
            prop_assert_eq!(merged.passport.number, expect_str(&patch.passport.number, &stored.passport.number));
            prop_assert_eq!(merged.department.id, expect_id(patch.department.id, stored.department.id));
            prop_assert_eq!(merged.id, stored.id);
        }

        #[test]
        fn prop_merge_is_idempotent(stored in employee(), patch in employee()) {
            let once = merge_on_empty(&stored, &patch);
            let twice = merge_on_empty(&once, &patch);
            prop_assert_eq!(once.name, twice.name);
            prop_assert_eq!(once.company_id, twice.company_id);
            prop_assert_eq!(once.passport, twice.passport);
            prop_assert_eq!(once.department.id, twice.department.id);
        }
    }
}
