//! Fixed meal-plan catalog
//!
//! Three plans, four meals each, written for a 2000 kcal day. Only the
//! `{qty}` token of scaled items changes between calculations.

use super::quantity::Unit;

/// Placeholder replaced by the scaled quantity and its unit
pub const QTY_TOKEN: &str = "{qty}";

/// One line of a meal
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemTemplate {
    /// Rendered verbatim
    Fixed(&'static str),
    /// `text` contains [`QTY_TOKEN`], replaced by e.g. `"150 g"`
    Scaled {
        base: f64,
        unit: Unit,
        text: &'static str,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct MealTemplate {
    pub title: &'static str,
    pub items: &'static [ItemTemplate],
}

#[derive(Debug, Clone, Copy)]
pub struct PlanTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub breakfast: MealTemplate,
    pub lunch: MealTemplate,
    pub snack: MealTemplate,
    pub dinner: MealTemplate,
}

impl PlanTemplate {
    /// Meals in serving order
    pub fn meals(&self) -> [&MealTemplate; 4] {
        [&self.breakfast, &self.lunch, &self.snack, &self.dinner]
    }
}

const fn fixed(text: &'static str) -> ItemTemplate {
    ItemTemplate::Fixed(text)
}

const fn scaled(base: f64, unit: Unit, text: &'static str) -> ItemTemplate {
    ItemTemplate::Scaled { base, unit, text }
}

const BREAKFAST: &str = "Café da Manhã";
const LUNCH: &str = "Almoço";
const SNACK: &str = "Lanche da Tarde";
const DINNER: &str = "Jantar";

pub static PLAN_CATALOG: [PlanTemplate; 3] = [
    PlanTemplate {
        name: "Opção 1: O Clássico Brasileiro",
        description: "Arroz, feijão e comida de verdade. Acessível e fácil de manter.",
        breakfast: MealTemplate {
            title: BREAKFAST,
            items: &[
                scaled(2.0, Unit::Eggs, "{qty} mexidos ou cozidos"),
                scaled(2.0, Unit::Slices, "{qty} de pão integral ou francês (sem miolo)"),
                scaled(1.0, Unit::Pieces, "{qty} fruta média (banana/maçã)"),
                fixed("Café preto ou chá (sem açúcar)"),
            ],
        },
        lunch: MealTemplate {
            title: LUNCH,
            items: &[
                scaled(150.0, Unit::Grams, "{qty} de arroz branco ou integral (cozido)"),
                scaled(100.0, Unit::Grams, "{qty} de feijão (cozido)"),
                scaled(120.0, Unit::Grams, "{qty} de frango grelhado ou carne moída magra"),
                fixed("Salada de folhas verdes à vontade (alface, rúcula)"),
                fixed("1 colher (sopa) de azeite de oliva"),
            ],
        },
        snack: MealTemplate {
            title: SNACK,
            items: &[
                scaled(170.0, Unit::Grams, "{qty} de iogurte natural ou desnatado"),
                scaled(30.0, Unit::Grams, "{qty} de aveia em flocos"),
                scaled(1.0, Unit::Pieces, "{qty} fruta (ex: mamão ou melão)"),
            ],
        },
        dinner: MealTemplate {
            title: DINNER,
            items: &[
                fixed("Mesma base do almoço (pode reduzir o arroz pela metade se preferir)"),
                fixed("OU: Omelete com legumes (tomate, espinafre)"),
                scaled(120.0, Unit::Grams, "{qty} de proteína magra"),
                fixed("Vegetais cozidos (brócolis, cenoura)"),
            ],
        },
    },
    PlanTemplate {
        name: "Opção 2: Prático e Econômico",
        description: "Foco em alimentos baratos como ovos, raízes e frango.",
        breakfast: MealTemplate {
            title: BREAKFAST,
            items: &[
                scaled(80.0, Unit::Grams, "{qty} de tapioca ou cuscuz hidratado"),
                scaled(2.0, Unit::Eggs, "{qty} mexidos"),
                fixed("1 fatia de queijo branco ou minas"),
                fixed("Café preto"),
            ],
        },
        lunch: MealTemplate {
            title: LUNCH,
            items: &[
                scaled(200.0, Unit::Grams, "{qty} de batata inglesa ou doce cozida/assada"),
                scaled(120.0, Unit::Grams, "{qty} de filé de frango ou sardinha"),
                fixed("Vegetais refogados (abobrinha, berinjela)"),
                fixed("Salada crua à vontade"),
            ],
        },
        snack: MealTemplate {
            title: SNACK,
            items: &[
                scaled(2.0, Unit::Slices, "{qty} de pão de forma"),
                fixed("Pasta de amendoim ou requeijão light"),
                fixed("1 fruta prática (banana)"),
            ],
        },
        dinner: MealTemplate {
            title: DINNER,
            items: &[
                fixed("Sopa de legumes com frango desfiado"),
                scaled(150.0, Unit::Grams, "OU: {qty} de batata cozida"),
                scaled(3.0, Unit::Eggs, "{qty} cozidos ou mexidos"),
                fixed("Salada de tomate e pepino"),
            ],
        },
    },
    PlanTemplate {
        name: "Opção 3: Rápido (Marmita Friendly)",
        description: "Para quem tem pouco tempo. Sanduíches e massas práticas.",
        breakfast: MealTemplate {
            title: BREAKFAST,
            items: &[
                fixed("Vitamina: Leite desnatado ou vegetal"),
                scaled(1.0, Unit::Pieces, "{qty} banana congelada"),
                scaled(30.0, Unit::Grams, "{qty} de whey protein ou leite em pó"),
                scaled(20.0, Unit::Grams, "{qty} de aveia"),
            ],
        },
        lunch: MealTemplate {
            title: LUNCH,
            items: &[
                scaled(120.0, Unit::Grams, "{qty} de macarrão (peso cozido)"),
                scaled(120.0, Unit::Grams, "{qty} de carne moída (molho bolonhesa magro)"),
                fixed("Vegetais misturados ao molho (cenoura ralada, tomate)"),
                fixed("1 colher de queijo parmesão ralado"),
            ],
        },
        snack: MealTemplate {
            title: SNACK,
            items: &[
                fixed("Sanduíche natural:"),
                scaled(2.0, Unit::Slices, "{qty} de pão integral"),
                fixed("Pasta de atum ou frango desfiado com ricota"),
                fixed("Alface e tomate"),
            ],
        },
        dinner: MealTemplate {
            title: DINNER,
            items: &[
                fixed("Wrap (massa de tortilha integral ou pão sírio)"),
                fixed("Recheio: Frango em cubos, alface, tomate, cenoura"),
                fixed("Molho de iogurte com mostarda"),
                fixed("1 Fruta de sobremesa"),
            ],
        },
    },
];
