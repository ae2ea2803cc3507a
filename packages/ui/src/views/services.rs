use dioxus::prelude::*;

use crate::paths;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

struct ServiceGroup {
    title: &'static str,
    summary: &'static str,
    items: &'static [(&'static str, &'static str)],
}

const GROUPS: &[ServiceGroup] = &[
    ServiceGroup {
        title: "Cuidados Básicos",
        summary: "Serviços essenciais de assistência diária para garantir conforto e bem-estar",
        items: &[
            ("Higiene Pessoal", "Auxílio no banho, higiene bucal, troca de roupas e fraldas"),
            ("Alimentação", "Preparo de refeições adequadas à dieta e auxílio na alimentação"),
            ("Locomoção e Transferência", "Auxílio para levantar da cama, sentar, caminhar e realizar atividades"),
            ("Companhia", "Presença para conversar, entreter e fornecer apoio emocional"),
        ],
    },
    ServiceGroup {
        title: "Cuidados Específicos",
        summary: "Cuidados especializados para necessidades específicas de saúde",
        items: &[
            ("Monitoramento de Sinais Vitais", "Acompanhamento de pressão, temperatura e batimentos cardíacos"),
            ("Administração de Medicamentos", "Controle da medicação conforme prescrição médica"),
            ("Cuidados com Feridas", "Limpeza e curativos em feridas sob orientação médica"),
            ("Estímulo Cognitivo", "Atividades para manter e estimular as capacidades mentais"),
        ],
    },
    ServiceGroup {
        title: "Serviços Adicionais",
        summary: "Apoio em situações que pedem atenção especial",
        items: &[
            ("Acompanhamento em Consultas", "Transporte e acompanhamento em consultas médicas, exames e terapias"),
            ("Atendimento Pós-Hospitalar", "Cuidados especiais para pacientes em recuperação após internação"),
            ("Cuidados a Pacientes com Alzheimer", "Atendimento especializado para pessoas com Alzheimer e outras demências"),
            ("Cuidados Paliativos", "Suporte para proporcionar conforto e dignidade em cuidados paliativos"),
            ("Plantão Noturno", "Acompanhamento durante a noite para garantir segurança e atendimento imediato"),
            ("Fisioterapia Domiciliar", "Sessões de fisioterapia realizadas no conforto da casa do paciente"),
        ],
    },
];

const FAQ: &[(&str, &str)] = &[
    (
        "Qual é a diferença entre cuidador e enfermeiro?",
        "O cuidador apoia as atividades do dia a dia. Procedimentos de saúde ficam com técnicos e enfermeiros registrados no COREN.",
    ),
    (
        "Os cuidadores têm formação específica?",
        "Sim. Verificamos cursos, experiência e referências de cada profissional.",
    ),
    (
        "Como é feita a seleção dos cuidadores?",
        "Analisamos o cadastro, conferimos referências e fazemos uma entrevista antes de indicar qualquer profissional.",
    ),
    (
        "É possível contratar por períodos específicos?",
        "Sim. Há opções diurnas, noturnas, integrais e por plantão.",
    ),
];

#[component]
pub fn ServicesView() -> Element {
    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        section {
            class: "page-hero",
            div {
                class: "container",
                h1 { "Nossos Serviços" }
                p { class: "lead", "Cuidado completo, do dia a dia às necessidades mais específicas." }
            }
        }

        for group in GROUPS {
            section {
                key: "{group.title}",
                class: "container section",
                h2 { "{group.title}" }
                p { class: "muted", "{group.summary}" }
                div {
                    class: "card-grid",
                    for (title, text) in group.items.iter().copied() {
                        div {
                            key: "{title}",
                            class: "card",
                            h3 { "{title}" }
                            p { "{text}" }
                        }
                    }
                }
            }
        }

        section {
            class: "container section",
            h2 { "Como Funciona" }
            ol {
                class: "steps",
                li { strong { "Entre em Contato" } " Conte o que seu familiar precisa." }
                li { strong { "Receba Indicações" } " Sugerimos profissionais adequados ao caso." }
                li { strong { "Inicie o Atendimento" } " Combine os detalhes e comece o cuidado." }
            }
            Link { class: "btn btn-primary", to: paths::CONTACT, "Falar com a equipe" }
        }

        section {
            class: "container section",
            h2 { "Perguntas Frequentes" }
            for (question, answer) in FAQ.iter().copied() {
                details {
                    key: "{question}",
                    class: "faq",
                    summary { "{question}" }
                    p { "{answer}" }
                }
            }
        }
    }
}
