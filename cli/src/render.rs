//! Plain-text rendering of a calculation
//!
//! Follows the exported document: page 1 carries the profile, the
//! nutrition targets and the data used; page 2 lists the meal plans.
//! Every number comes from the result as-is.

use chrono::NaiveDate;
use nutriplan_shared::{CalculationResult, Goal, MealPlan, UserInput};

const RULE: &str = "----------------------------------------";

/// Render both pages, separated by a form feed
pub fn render_text(input: &UserInput, result: &CalculationResult, date: NaiveDate) -> String {
    let mut pages = render_summary_page(input, result, date);
    pages.push('\u{c}');
    pages.push('\n');
    pages.push_str(&render_meal_plan_page(&result.meal_plans));
    pages
}

/// Profile, targets and the inputs used
pub fn render_summary_page(input: &UserInput, result: &CalculationResult, date: NaiveDate) -> String {
    let macros = &result.macros;
    let profile = &result.profile;
    let goal_label = input.goal.label();

    let mut lines = vec![
        "NUTRIPLAN".to_string(),
        format!("Data do cálculo: {}", date.format("%d/%m/%Y")),
        RULE.to_string(),
        format!("Aluno: {}", input.name),
    ];
    if macros.weeks_to_goal > 0 {
        lines.push(format!(
            "Meta: {goal_label} - Estimativa: {} semanas",
            macros.weeks_to_goal
        ));
    } else {
        lines.push(format!("Meta: {goal_label}"));
    }

    lines.extend([
        String::new(),
        "PERFIL COMPORTAMENTAL".to_string(),
        profile.profile_name.clone(),
        profile.description.clone(),
        String::new(),
        "CONSELHO ESTRATÉGICO".to_string(),
        profile.advice.clone(),
        String::new(),
        "METAS NUTRICIONAIS".to_string(),
        format!("{} kcal / dia", macros.calories),
        format!("PROTEÍNA      {}g ({}%)", macros.protein, macros.protein_perc),
        format!("CARBOIDRATOS  {}g ({}%)", macros.carbs, macros.carbs_perc),
        format!("GORDURAS      {}g ({}%)", macros.fat, macros.fat_perc),
        format!("Fórmula: {}", macros.formula_used),
        RULE.to_string(),
        "DADOS UTILIZADOS".to_string(),
    ]);

    let target_weight = input
        .target_weight
        .map_or_else(|| "-".to_string(), |w| w.to_string());
    let rate = match input.goal {
        Goal::Maintain => "Manutenção".to_string(),
        Goal::LoseWeight | Goal::GainMuscle => format!("{}kg / semana", input.weekly_rate),
    };
    let data_points = [
        format!("Peso Atual: {} kg", input.weight),
        format!("Peso Desejável: {target_weight} kg"),
        format!("Altura: {} cm", input.height),
        format!("Idade: {} anos", input.age),
        format!("Objetivo: {goal_label}"),
        format!("Ritmo: {rate}"),
        format!("Nível Ativ.: {}", input.activity_level.label()),
    ];
    lines.extend(data_points.iter().map(|point| format!("• {point}")));

    lines.push(String::new());
    lines.push("Página 1/2".to_string());
    lines.join("\n") + "\n"
}

/// The three meal plans, one meal per line
pub fn render_meal_plan_page(plans: &[MealPlan]) -> String {
    let mut lines = vec![
        "SUGESTÕES DE CARDÁPIO".to_string(),
        "3 opções adaptadas para sua meta calórica, usando alimentos básicos.".to_string(),
    ];

    for plan in plans {
        lines.push(String::new());
        lines.push(plan.name.clone());
        lines.push(plan.description.clone());
        for meal in plan.meals.in_order() {
            lines.push(format!("• {}: {}", meal.title, meal.items.join(", ")));
        }
    }

    lines.push(String::new());
    lines.push("\"A melhor dieta é aquela que você consegue seguir.\" - Página 2/2".to_string());
    lines.join("\n") + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutriplan_shared::{calculate, ActivityLevel, DietHistory, Discipline, TrainingTime};
    use proptest::prelude::*;

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn test_summary_page_with_weeks_estimate() {
        let input = UserInput {
            name: "Marina".to_string(),
            target_weight: Some(70.0),
            ..UserInput::default()
        };
        let result = calculate(&input);
        let page = render_summary_page(&input, &result, sample_date());

        assert!(page.contains("Data do cálculo: 09/03/2024"));
        assert!(page.contains("Aluno: Marina"));
        assert!(page.contains("Meta: Emagrecer - Estimativa: 20 semanas"));
        assert!(page.contains("2161 kcal / dia"));
        assert!(page.contains("PROTEÍNA      160g (30%)"));
        assert!(page.contains("GORDURAS      64g (26%)"));
        assert!(page.contains("• Peso Desejável: 70 kg"));
        assert!(page.contains("• Ritmo: 0.5kg / semana"));
        assert!(page.contains("• Nível Ativ.: Moderadamente Ativo"));
    }

    #[test]
    fn test_summary_page_for_maintenance() {
        let input = UserInput {
            name: "Rui".to_string(),
            goal: Goal::Maintain,
            ..UserInput::default()
        };
        let result = calculate(&input);
        let page = render_summary_page(&input, &result, sample_date());

        assert!(page.contains("Meta: Manter Peso\n"));
        assert!(page.contains("• Peso Desejável: - kg"));
        assert!(page.contains("• Ritmo: Manutenção"));
    }

    #[test]
    fn test_meal_plan_page_lists_every_meal() {
        let result = calculate(&UserInput::default());
        let page = render_meal_plan_page(&result.meal_plans);

        assert_eq!(page.matches("• Café da Manhã:").count(), 3);
        assert_eq!(page.matches("• Jantar:").count(), 3);
        assert!(page.contains("Opção 2: Prático e Econômico"));
        assert!(page.contains("• Lanche da Tarde: Sanduíche natural:, 2 fatias de pão integral"));
    }

    #[test]
    fn test_full_report_has_two_pages() {
        let input = UserInput::default();
        let report = render_text(&input, &calculate(&input), sample_date());
        let pages: Vec<_> = report.split('\u{c}').collect();

        assert_eq!(pages.len(), 2);
        assert!(pages[0].ends_with("Página 1/2\n"));
        assert!(pages[1].trim_end().ends_with("Página 2/2"));
    }

    proptest! {
        #[test]
        fn prop_report_always_has_both_pages(
            weight in 40.0f64..150.0,
            height in 140.0f64..210.0,
            age in 16u32..80,
            activity in prop::sample::select(ActivityLevel::ALL.to_vec()),
            goal in prop::sample::select(Goal::ALL.to_vec()),
            training_time in prop::sample::select(TrainingTime::ALL.to_vec()),
            discipline in prop::sample::select(Discipline::ALL.to_vec()),
            diet_history in prop::sample::select(DietHistory::ALL.to_vec()),
        ) {
            let input = UserInput {
                name: "Teste".to_string(),
                weight,
                height,
                age,
                activity_level: activity,
                goal,
                training_time,
                discipline,
                diet_history,
                ..UserInput::default()
            };
            let result = calculate(&input);
            let report = render_text(&input, &result, sample_date());

            let calories_line = format!("{} kcal / dia", result.macros.calories);
            prop_assert!(report.contains(&calories_line));
            prop_assert!(report.contains(result.profile.profile_name.as_str()));
            prop_assert_eq!(report.matches("• Almoço:").count(), 3);
            prop_assert!(report.contains("Página 1/2"));
            prop_assert!(report.contains("Página 2/2"));
        }
    }
}
