//! Behavioral profile classifier
//!
//! A decision table over (discipline, diet history) selects a
//! [`ProfileKind`] and an [`AdviceKind`]; training time only adds a
//! closing sentence to the advice.

use serde::{Deserialize, Serialize};

use crate::models::{DietHistory, Discipline, TrainingTime};

/// Profile variant selected by the decision table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileKind {
    /// High discipline
    SustainablePerformance,
    /// Medium discipline with more than five past diets
    AllOrNothing,
    /// Medium discipline with five or fewer past diets
    CommittedEvolution,
    /// Low discipline with at most two past diets
    EmotionalBeginner,
    /// Low discipline with three or more past diets
    WornOut,
}

impl ProfileKind {
    pub fn select(discipline: Discipline, history: DietHistory) -> Self {
        match (discipline, history) {
            (Discipline::High, _) => ProfileKind::SustainablePerformance,
            (Discipline::Medium, DietHistory::Many) => ProfileKind::AllOrNothing,
            (Discipline::Medium, _) => ProfileKind::CommittedEvolution,
            (Discipline::Low, DietHistory::None | DietHistory::Few) => {
                ProfileKind::EmotionalBeginner
            }
            (Discipline::Low, DietHistory::Some | DietHistory::Many) => ProfileKind::WornOut,
        }
    }

    /// Profile name shown to the user; two variants share a name
    pub fn name(&self) -> &'static str {
        match self {
            ProfileKind::SustainablePerformance => "Alta Performance Sustentável",
            ProfileKind::AllOrNothing | ProfileKind::WornOut => "Inconsistente Estratégico",
            ProfileKind::CommittedEvolution => "Comprometido em Evolução",
            ProfileKind::EmotionalBeginner => "Iniciante Emocional",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ProfileKind::SustainablePerformance => {
                "Você possui a mentalidade necessária para seguir planos com rigor. Sua capacidade de execução é seu maior trunfo, permitindo estratégias mais precisas e resultados acelerados."
            }
            ProfileKind::AllOrNothing => {
                "Você sabe o que fazer, mas o histórico de muitas tentativas gera um ciclo de \"tudo ou nada\". O foco agora não é perfeição, mas evitar a desistência total nos dias difíceis."
            }
            ProfileKind::CommittedEvolution => {
                "Você tem boa intenção e oscila dentro do esperado. Seu caminho para o sucesso é transformar a motivação pontual em hábitos automáticos, reduzindo a necessidade de força de vontade."
            }
            ProfileKind::EmotionalBeginner => {
                "Tudo é novidade e suas emoções influenciam muito suas escolhas. O segredo é começar devagar, celebrando pequenas vitórias em vez de buscar o corpo perfeito em um mês."
            }
            ProfileKind::WornOut => {
                "Você já tentou muito e está cansado. Sua disciplina falha porque você provavelmente tenta métodos insustentáveis. Vamos focar no \"feito é melhor que perfeito\"."
            }
        }
    }
}

/// Base advice paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdviceKind {
    Consistency,
    Performance,
    Habit,
}

impl AdviceKind {
    /// Low discipline or a long diet history takes precedence over high discipline
    pub fn select(discipline: Discipline, history: DietHistory) -> Self {
        if discipline == Discipline::Low || history == DietHistory::Many {
            AdviceKind::Consistency
        } else if discipline == Discipline::High {
            AdviceKind::Performance
        } else {
            AdviceKind::Habit
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            AdviceKind::Consistency => {
                "Priorize a consistência acima da perfeição. Se errar uma refeição, volte na próxima. Evite restrições extremas que geram compulsão. O sucesso virá de não desistir nos dias ruins."
            }
            AdviceKind::Performance => {
                "Seu potencial de resultado é alto. Aproveite sua disciplina para treinar com intensidade e monitorar seu progresso. Cuidado apenas para não ser rígido demais; a flexibilidade garante a longo prazo."
            }
            AdviceKind::Habit => {
                "Você está no caminho certo. O segredo agora é transformar sua rotina em hábito automático. Planeje suas refeições com antecedência para evitar decisões impulsivas quando estiver cansado."
            }
        }
    }
}

/// Appended to the advice when sessions are shorter than 45 minutes
pub const SHORT_SESSION_ADVICE: &str = "Como seu tempo é curto, a intensidade do treino e a aderência à dieta serão seus maiores aliados. Resultados vêm da constância, não de horas na academia.";

/// Classified behavioral profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResult {
    pub kind: ProfileKind,
    pub profile_name: String,
    pub description: String,
    pub advice: String,
}

/// Classify a user's behavioral profile
pub fn classify_profile(
    discipline: Discipline,
    history: DietHistory,
    training_time: TrainingTime,
) -> ProfileResult {
    let kind = ProfileKind::select(discipline, history);

    let mut advice = AdviceKind::select(discipline, history).text().to_string();
    if training_time.is_short() {
        advice.push(' ');
        advice.push_str(SHORT_SESSION_ADVICE);
    }

    ProfileResult {
        kind,
        profile_name: kind.name().to_string(),
        description: kind.description().to_string(),
        advice,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(Discipline::High, DietHistory::None, ProfileKind::SustainablePerformance, AdviceKind::Performance)]
    #[case(Discipline::High, DietHistory::Some, ProfileKind::SustainablePerformance, AdviceKind::Performance)]
    #[case(Discipline::High, DietHistory::Many, ProfileKind::SustainablePerformance, AdviceKind::Consistency)]
    #[case(Discipline::Medium, DietHistory::None, ProfileKind::CommittedEvolution, AdviceKind::Habit)]
    #[case(Discipline::Medium, DietHistory::Few, ProfileKind::CommittedEvolution, AdviceKind::Habit)]
    #[case(Discipline::Medium, DietHistory::Some, ProfileKind::CommittedEvolution, AdviceKind::Habit)]
    #[case(Discipline::Medium, DietHistory::Many, ProfileKind::AllOrNothing, AdviceKind::Consistency)]
    #[case(Discipline::Low, DietHistory::None, ProfileKind::EmotionalBeginner, AdviceKind::Consistency)]
    #[case(Discipline::Low, DietHistory::Few, ProfileKind::EmotionalBeginner, AdviceKind::Consistency)]
    #[case(Discipline::Low, DietHistory::Some, ProfileKind::WornOut, AdviceKind::Consistency)]
    #[case(Discipline::Low, DietHistory::Many, ProfileKind::WornOut, AdviceKind::Consistency)]
    fn test_decision_table(
        #[case] discipline: Discipline,
        #[case] history: DietHistory,
        #[case] profile: ProfileKind,
        #[case] advice: AdviceKind,
    ) {
        assert_eq!(ProfileKind::select(discipline, history), profile);
        assert_eq!(AdviceKind::select(discipline, history), advice);
    }

    #[test]
    fn test_strategic_inconsistent_framings_share_a_name() {
        let medium = classify_profile(Discipline::Medium, DietHistory::Many, TrainingTime::Over60);
        let low = classify_profile(Discipline::Low, DietHistory::Some, TrainingTime::Over60);

        assert_eq!(medium.kind, ProfileKind::AllOrNothing);
        assert_eq!(low.kind, ProfileKind::WornOut);
        assert_eq!(medium.profile_name, "Inconsistente Estratégico");
        assert_eq!(medium.profile_name, low.profile_name);
        assert!(medium.description.contains("tudo ou nada"));
        assert!(low.description.contains("feito é melhor que perfeito"));
    }

    #[test]
    fn test_shared_profile_name_keeps_distinct_descriptions() {
        let medium = classify_profile(Discipline::Medium, DietHistory::Many, TrainingTime::Over60);
        let low = classify_profile(Discipline::Low, DietHistory::Some, TrainingTime::Over60);

        assert_eq!(medium.profile_name, "Inconsistente Estratégico");
        assert_eq!(low.profile_name, "Inconsistente Estratégico");
        assert_ne!(medium.description, low.description);
    }

    #[rstest]
    #[case(TrainingTime::Under30, true)]
    #[case(TrainingTime::Between30And45, true)]
    #[case(TrainingTime::Between45And60, false)]
    #[case(TrainingTime::Over60, false)]
    fn test_short_session_suffix(#[case] time: TrainingTime, #[case] has_suffix: bool) {
        let result = classify_profile(Discipline::High, DietHistory::Few, time);
        let base = AdviceKind::Performance.text();

        assert!(result.advice.starts_with(base));
        assert_eq!(result.advice.ends_with(SHORT_SESSION_ADVICE), has_suffix);
        if has_suffix {
            assert_eq!(result.advice, format!("{base} {SHORT_SESSION_ADVICE}"));
        } else {
            assert_eq!(result.advice, base);
        }
    }

    #[test]
    fn test_profile_serializes_camel_case() {
        let json = serde_json::to_value(classify_profile(
            Discipline::Low,
            DietHistory::None,
            TrainingTime::Over60,
        ))
        .unwrap();
        assert_eq!(json["profileName"], "Iniciante Emocional");
        assert_eq!(json["kind"], "emotional_beginner");
    }

    fn arb_discipline() -> impl Strategy<Value = Discipline> {
        prop::sample::select(Discipline::ALL.to_vec())
    }

    fn arb_history() -> impl Strategy<Value = DietHistory> {
        prop::sample::select(DietHistory::ALL.to_vec())
    }

    fn arb_time() -> impl Strategy<Value = TrainingTime> {
        prop::sample::select(TrainingTime::ALL.to_vec())
    }

    proptest! {
        /// Identical inputs always give identical profiles
        #[test]
        fn prop_classification_is_deterministic(
            discipline in arb_discipline(),
            history in arb_history(),
            time in arb_time(),
        ) {
            prop_assert_eq!(
                classify_profile(discipline, history, time),
                classify_profile(discipline, history, time)
            );
        }

        /// The time suffix is only ever appended, never interleaved
        #[test]
        fn prop_advice_starts_with_base(
            discipline in arb_discipline(),
            history in arb_history(),
            time in arb_time(),
        ) {
            let result = classify_profile(discipline, history, time);
            let base = AdviceKind::select(discipline, history).text();
            prop_assert!(result.advice.starts_with(base));
        }
    }
}
