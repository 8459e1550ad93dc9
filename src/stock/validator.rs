//! Order validation against a snapshot of menu items and stock.

use super::plan::{DeductionPlan, PlannedDeduction, Shortfall};
use crate::model::{MenuItem, MenuItemId, OrderLine, Resource, ResourceId};
use crate::order_actor::OrderError;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};

/// Rejects empty orders and non-positive line quantities.
pub fn check_lines(lines: &[OrderLine]) -> Result<(), OrderError> {
    if lines.is_empty() {
        return Err(OrderError::InvalidInput("order has no lines".to_string()));
    }
    for line in lines {
        if line.quantity <= 0 {
            return Err(OrderError::InvalidInput(format!(
                "quantity for {} must be positive, got {}",
                line.menu_item_id, line.quantity
            )));
        }
    }
    Ok(())
}

#[derive(Default)]
struct Requirement {
    amount: Decimal,
    menu_item_names: Vec<String>,
}

/// Computes what an order consumes and checks it against `resources`.
///
/// Requirements are summed per resource across all lines before they are compared, so
/// two items that each fit on their own can still fail together. On failure every
/// short resource is reported, and only those. No state is touched.
pub fn plan_order(
    lines: &[OrderLine],
    menu: &HashMap<MenuItemId, MenuItem>,
    resources: &HashMap<ResourceId, Resource>,
) -> Result<DeductionPlan, OrderError> {
    check_lines(lines)?;

    let mut required: BTreeMap<ResourceId, Requirement> = BTreeMap::new();
    for line in lines {
        let item = menu
            .get(&line.menu_item_id)
            .ok_or_else(|| OrderError::NotFound(line.menu_item_id.to_string()))?;
        if !item.available {
            return Err(OrderError::InvalidInput(format!(
                "{} is not available",
                item.name
            )));
        }

        let ordered = Decimal::from(line.quantity);
        for recipe_line in &item.recipe {
            let amount = recipe_line.quantity.checked_mul(ordered).ok_or_else(|| {
                OrderError::InvalidInput(format!("quantity for {} is too large", item.name))
            })?;
            if amount.is_zero() {
                continue;
            }
            let entry = required.entry(recipe_line.resource_id).or_default();
            entry.amount = entry.amount.checked_add(amount).ok_or_else(|| {
                OrderError::InvalidInput(format!("quantity for {} is too large", item.name))
            })?;
            if !entry.menu_item_names.contains(&item.name) {
                entry.menu_item_names.push(item.name.clone());
            }
        }
    }

    let mut deductions = Vec::with_capacity(required.len());
    let mut shortfalls = Vec::new();
    for (resource_id, requirement) in required {
        let resource = resources
            .get(&resource_id)
            .ok_or_else(|| OrderError::NotFound(resource_id.to_string()))?;
        if requirement.amount > resource.quantity {
            shortfalls.push(Shortfall {
                resource_id,
                resource_name: resource.name.clone(),
                menu_item_names: requirement.menu_item_names,
                required: requirement.amount,
                available: resource.quantity,
            });
        } else {
            deductions.push(PlannedDeduction {
                resource_id,
                resource_name: resource.name.clone(),
                amount: requirement.amount,
            });
        }
    }

    if !shortfalls.is_empty() {
        return Err(OrderError::InsufficientStock(shortfalls));
    }
    Ok(DeductionPlan::new(deductions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CategoryId, RecipeLine, Unit};

    const MILK: ResourceId = ResourceId(1);
    const BEANS: ResourceId = ResourceId(2);
    const CUPS: ResourceId = ResourceId(3);

    const LATTE: MenuItemId = MenuItemId(1);
    const ESPRESSO: MenuItemId = MenuItemId(2);
    const AMERICANO: MenuItemId = MenuItemId(3);
    const COOKIE: MenuItemId = MenuItemId(4);

    fn item(id: MenuItemId, name: &str, recipe: Vec<RecipeLine>) -> MenuItem {
        MenuItem {
            id,
            name: name.into(),
            price: Decimal::new(350, 2),
            category: CategoryId(1),
            description: String::new(),
            recipe,
            available: true,
        }
    }

    fn menu() -> HashMap<MenuItemId, MenuItem> {
        [
            item(
                LATTE,
                "Latte",
                vec![
                    RecipeLine::new(MILK, Decimal::from(240)),
                    RecipeLine::new(BEANS, Decimal::from(18)),
                ],
            ),
            item(
                ESPRESSO,
                "Espresso",
                vec![
                    RecipeLine::new(BEANS, Decimal::from(18)),
                    RecipeLine::new(CUPS, Decimal::ONE),
                ],
            ),
            item(
                AMERICANO,
                "Americano",
                vec![
                    RecipeLine::new(BEANS, Decimal::from(18)),
                    RecipeLine::new(CUPS, Decimal::ZERO),
                ],
            ),
            item(COOKIE, "Cookie", vec![]),
        ]
        .into_iter()
        .map(|item| (item.id, item))
        .collect()
    }

    fn stock(milk: i64, beans: i64, cups: i64) -> HashMap<ResourceId, Resource> {
        [
            Resource::new(MILK, "Milk", Unit::Ml, Decimal::from(milk), Decimal::from(50)),
            Resource::new(BEANS, "Coffee Beans", Unit::G, Decimal::from(beans), Decimal::from(100)),
            Resource::new(CUPS, "Cups", Unit::Pcs, Decimal::from(cups), Decimal::from(10)),
        ]
        .into_iter()
        .map(|r| (r.id, r))
        .collect()
    }

    #[test]
    fn test_single_latte_plans_exact_amounts() {
        let plan = plan_order(&[OrderLine::new(LATTE, 1)], &menu(), &stock(240, 500, 50)).unwrap();
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.amount_for(MILK), Some(Decimal::from(240)));
        assert_eq!(plan.amount_for(BEANS), Some(Decimal::from(18)));
    }

    #[test]
    fn test_two_lattes_exceed_milk() {
        let err = plan_order(&[OrderLine::new(LATTE, 2)], &menu(), &stock(240, 500, 50)).unwrap_err();
        assert_eq!(
            err,
            OrderError::InsufficientStock(vec![Shortfall {
                resource_id: MILK,
                resource_name: "Milk".into(),
                menu_item_names: vec!["Latte".into()],
                required: Decimal::from(480),
                available: Decimal::from(240),
            }])
        );
    }

    #[test]
    fn test_requirements_aggregate_across_lines() {
        let lines = [OrderLine::new(ESPRESSO, 1), OrderLine::new(AMERICANO, 1)];
        let err = plan_order(&lines, &menu(), &stock(240, 30, 50)).unwrap_err();
        let OrderError::InsufficientStock(shortfalls) = err else {
            panic!("Expected InsufficientStock");
        };
        assert_eq!(shortfalls.len(), 1);
        assert_eq!(shortfalls[0].resource_id, BEANS);
        assert_eq!(shortfalls[0].required, Decimal::from(36));
        assert_eq!(shortfalls[0].available, Decimal::from(30));
        assert_eq!(shortfalls[0].menu_item_names, vec!["Espresso", "Americano"]);
    }

    #[test]
    fn test_repeated_item_lines_are_summed() {
        let lines = [OrderLine::new(LATTE, 1), OrderLine::new(LATTE, 1)];
        let plan = plan_order(&lines, &menu(), &stock(480, 500, 50)).unwrap();
        assert_eq!(plan.amount_for(MILK), Some(Decimal::from(480)));
    }

    #[test]
    fn test_only_short_resources_are_reported() {
        let lines = [OrderLine::new(LATTE, 2), OrderLine::new(ESPRESSO, 1)];
        let err = plan_order(&lines, &menu(), &stock(100, 10, 50)).unwrap_err();
        let OrderError::InsufficientStock(shortfalls) = err else {
            panic!("Expected InsufficientStock");
        };
        let ids: Vec<_> = shortfalls.iter().map(|s| s.resource_id).collect();
        assert_eq!(ids, vec![MILK, BEANS]);
        assert_eq!(shortfalls[1].required, Decimal::from(54));
    }

    #[test]
    fn test_exactly_available_passes() {
        let plan = plan_order(&[OrderLine::new(ESPRESSO, 2)], &menu(), &stock(0, 36, 2)).unwrap();
        assert_eq!(plan.amount_for(BEANS), Some(Decimal::from(36)));
        assert_eq!(plan.amount_for(CUPS), Some(Decimal::from(2)));
    }

    #[test]
    fn test_zero_amounts_are_left_out() {
        let plan = plan_order(&[OrderLine::new(AMERICANO, 3)], &menu(), &stock(0, 54, 0)).unwrap();
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.amount_for(CUPS), None);
    }

    #[test]
    fn test_item_without_recipe_plans_nothing() {
        let plan = plan_order(&[OrderLine::new(COOKIE, 12)], &menu(), &HashMap::new()).unwrap();
        assert!(plan.is_empty());
    }

    #[test]
    fn test_fractional_recipe_quantities() {
        let mut menu = menu();
        menu.insert(
            MenuItemId(9),
            item(MenuItemId(9), "Ristretto", vec![RecipeLine::new(BEANS, Decimal::new(185, 1))]),
        );
        let plan = plan_order(&[OrderLine::new(MenuItemId(9), 2)], &menu, &stock(0, 37, 0)).unwrap();
        assert_eq!(plan.amount_for(BEANS), Some(Decimal::from(37)));
    }

    #[test]
    fn test_invalid_lines() {
        let cases = [vec![], vec![OrderLine::new(LATTE, 0)], vec![OrderLine::new(LATTE, -1)]];
        for lines in cases {
            assert!(matches!(
                plan_order(&lines, &menu(), &stock(240, 500, 50)),
                Err(OrderError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_missing_menu_item_and_resource() {
        assert_eq!(
            plan_order(&[OrderLine::new(MenuItemId(42), 1)], &menu(), &stock(240, 500, 50)).unwrap_err(),
            OrderError::NotFound("menu_item_42".into())
        );

        let mut resources = stock(240, 500, 50);
        resources.remove(&MILK);
        assert_eq!(
            plan_order(&[OrderLine::new(LATTE, 1)], &menu(), &resources).unwrap_err(),
            OrderError::NotFound("resource_1".into())
        );
    }

    #[test]
    fn test_unavailable_item_is_rejected() {
        let mut menu = menu();
        if let Some(latte) = menu.get_mut(&LATTE) {
            latte.available = false;
        }
        assert!(matches!(
            plan_order(&[OrderLine::new(LATTE, 1)], &menu, &stock(240, 500, 50)),
            Err(OrderError::InvalidInput(_))
        ));
    }
}
