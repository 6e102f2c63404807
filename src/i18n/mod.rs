//! Static EN/PT translation catalog.
//!
//! Lookup never fails: unknown keys are returned verbatim, so a missing
//! entry shows up in the page as the raw key instead of breaking the render.
//! The two catalogs are kept key-isomorphic (enforced by a test below).

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::OnceLock;

use thiserror::Error;

/// Supported interface languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Pt,
}

/// Raised when a persisted language code is not one of the two valid values.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported language code {0:?}")]
pub struct UnsupportedLanguage(String);

impl Language {
    /// The literal persisted under the `portfolio-language` storage key.
    pub const fn as_str(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Pt => "pt",
        }
    }

    /// The other language; the UI toggle is a plain binary flip.
    pub const fn toggled(self) -> Self {
        match self {
            Language::En => Language::Pt,
            Language::Pt => Language::En,
        }
    }

    /// BCP 47 tag written to the document `lang` attribute.
    pub const fn document_lang(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Pt => "pt-PT",
        }
    }
}

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "pt" => Ok(Language::Pt),
            other => Err(UnsupportedLanguage(other.to_string())),
        }
    }
}

type Catalog = HashMap<&'static str, &'static str>;

fn catalog(lang: Language) -> &'static Catalog {
    static EN: OnceLock<Catalog> = OnceLock::new();
    static PT: OnceLock<Catalog> = OnceLock::new();
    match lang {
        Language::En => EN.get_or_init(|| EN_STRINGS.iter().copied().collect()),
        Language::Pt => PT.get_or_init(|| PT_STRINGS.iter().copied().collect()),
    }
}

/// Look up `key` in the catalog for `lang`.
///
/// Returns the key itself when no entry exists; never panics.
pub fn translate(lang: Language, key: &str) -> &str {
    catalog(lang).get(key).copied().unwrap_or(key)
}

const EN_STRINGS: &[(&str, &str)] = &[
    // Header
    ("portfolio.year", "PORTFOLIO / 2025"),
    ("intro.title", "Felipe"),
    ("intro.subtitle", "Kreulich"),
    (
        "intro.description",
        "Full Stack Developer crafting digital experiences at the intersection of",
    ),
    ("intro.design", "design"),
    ("intro.technology", "technology"),
    ("intro.and", "and"),
    ("intro.human_behavior", "human behavior"),
    ("intro.available", "Available for work"),
    ("intro.location", "Lisboa, Portugal"),
    ("intro.cv_download", "Download CV"),
    ("intro.currently", "CURRENTLY"),
    ("intro.role", "Full Stack Developer"),
    ("intro.company", "@ POP Tecnologia e Mobilidade"),
    ("intro.period", "2025 — Present"),
    ("intro.focus", "FOCUS"),
    // About Section
    ("about.title", "About Me"),
    (
        "about.description",
        "A passionate developer who loves to create meaningful digital experiences.",
    ),
    ("about.age", "Age"),
    ("about.age_value", "23 years"),
    ("about.location_full", "Lisboa, Portugal"),
    ("about.interests", "Interests"),
    ("about.interests_list", "Technology, Design, Music, Travel"),
    ("about.available_for", "Available for"),
    ("about.available_for_value", "Freelance & Full-time"),
    // Work Section
    ("work.title", "Selected Work"),
    ("work.period", "2025 — Present"),
    (
        "work.army.role",
        "Support Technician and Full Stack Developer",
    ),
    ("work.army.company", "9º Batalhão de Polícia do Exército"),
    (
        "work.army.description",
        "Provided technical support to employees and developed solutions for the daily operations of the battalion.",
    ),
    ("work.cstc.role", "Full Stack Developer"),
    ("work.cstc.company", "CSTC"),
    (
        "work.cstc.description",
        "Developed a people management application, it was a very rewarding experience.",
    ),
    ("work.pop.role", "Full Stack Developer"),
    ("work.pop.company", "POP Tecnologia e Mobilidade"),
    (
        "work.pop.description",
        "I cannot say much about the project, but it was a very rewarding experience.",
    ),
    ("work.az.role", "Fullstack Developer and Support Analyst"),
    ("work.az.company", "AZ Tecnologia e Gestao"),
    (
        "work.az.description",
        "At AZ I worked as a fullstack analyst and developer, developing internal tools for use in support",
    ),
    // Projects Section
    ("projects.title", "Featured Projects"),
    (
        "projects.description",
        "A selection of my recent work and personal projects.",
    ),
    ("projects.portfolio.title", "Portfolio Website"),
    (
        "projects.portfolio.description",
        "Modern portfolio built with Next.js, TypeScript, and Tailwind CSS. Features dark/light theme, multilingual support, and responsive design.",
    ),
    ("projects.portfolio.tech", "Next.js, TypeScript, Tailwind CSS"),
    ("projects.portfolio.link", "View Project"),
    ("projects.wormhole.title", "Worm Hole"),
    (
        "projects.wormhole.description",
        "Worm Hole is a personal project I developed: a platform for secure file transfer and sharing through links. I transformed it into a SaaS, currently in testing phase, and will be available soon for everyone.",
    ),
    (
        "projects.wormhole.tech",
        "Next.JS, TypeScript, Tailwind CSS, Prisma, NeonDB, Vercel, MySQL",
    ),
    ("projects.wormhole.link", "View Project"),
    ("projects.blog.title", "Personal Blog"),
    (
        "projects.blog.description",
        "Personal blog built with Next.js, TypeScript, and Tailwind CSS. Features dark/light theme, multilingual support, and responsive design.",
    ),
    (
        "projects.blog.tech",
        "Next.js, TypeScript, Tailwind CSS, Prisma, NeonDB, Vercel, MySQL",
    ),
    ("projects.blog.link", "View Project"),
    ("projects.technologies", "Technologies"),
    // Services Section
    ("services.title", "Services"),
    (
        "services.description",
        "How I can help you bring your next idea to life.",
    ),
    ("services.development.title", "Web Development"),
    (
        "services.development.description",
        "Modern, fast and accessible web applications, from landing pages to full products.",
    ),
    (
        "services.development.features",
        "Next.js & React, REST APIs, Databases",
    ),
    ("services.design.title", "UI/UX Design"),
    (
        "services.design.description",
        "Interfaces that feel natural, backed by design systems that scale.",
    ),
    (
        "services.design.features",
        "Design Systems, Prototyping, Accessibility",
    ),
    ("services.maintenance.title", "Maintenance & Support"),
    (
        "services.maintenance.description",
        "Keeping your product healthy with monitoring, fixes and continuous improvements.",
    ),
    (
        "services.maintenance.features",
        "Monitoring, Bug fixes, Performance",
    ),
    ("services.consulting.title", "Consulting"),
    (
        "services.consulting.description",
        "Technical guidance for teams and founders making product decisions.",
    ),
    (
        "services.consulting.features",
        "Architecture, Code review, Mentoring",
    ),
    ("services.contact.title", "Have a project in mind?"),
    (
        "services.contact.description",
        "Tell me about it and I will get back to you within a day.",
    ),
    ("services.contact.quote_subject", "Project quote request"),
    ("services.contact.quote_button", "Request a quote"),
    ("services.contact.question_subject", "Question about services"),
    ("services.contact.question_button", "Ask a question"),
    // Thoughts / Blog Section
    ("thoughts.read_more", "Read more"),
    (
        "thoughts.feature_coming_soon",
        "This feature is still being added. Coming soon!",
    ),
    ("blog.badge", "New posts every week"),
    ("blog.title", "Thoughts & Writing"),
    (
        "blog.description",
        "Notes on software engineering, design and the craft of building for the web.",
    ),
    ("blog.cta", "Visit the blog"),
    ("blog.topic1.title", "The Future of Web Development"),
    (
        "blog.topic1.description",
        "Exploring how AI and automation are reshaping the way we build for the web.",
    ),
    ("blog.topic2.title", "Design Systems at Scale"),
    (
        "blog.topic2.description",
        "Lessons learned from building and maintaining design systems across multiple products.",
    ),
    ("blog.topic3.title", "Performance-First Development"),
    (
        "blog.topic3.description",
        "Why performance should be a first-class citizen in your development workflow.",
    ),
    ("blog.footer_text", "Prefer the long form?"),
    ("blog.footer_cta", "Read all posts"),
    // Calendar Section
    ("calendar.title", "Schedule a Meeting"),
    (
        "calendar.description",
        "Let's talk about your project and how I can help!",
    ),
    // Coffee Section
    ("coffee.badge", "Support my work"),
    ("coffee.title", "Buy me a coffee"),
    (
        "coffee.description",
        "If something I built or wrote helped you, a coffee keeps the side projects going.",
    ),
    ("coffee.feature1", "Fuel for late-night coding"),
    ("coffee.feature2", "More open-source experiments"),
    ("coffee.feature3", "New blog posts and tutorials"),
    ("coffee.cta", "Buy me a coffee"),
    ("coffee.thanks", "Thank you for the support!"),
    // Connect Section
    ("connect.title", "Let's Connect"),
    (
        "connect.description",
        "Always interested in new opportunities, collaborations, and conversations about technology and design.",
    ),
    ("connect.email", "contato.felipe.kreulich@gmail.com"),
    ("connect.elsewhere", "ELSEWHERE"),
    // Footer
    ("footer.copyright", "© 2025 Felipe Kreulich. All rights reserved."),
    ("footer.built_with", "Built with ❤️ by Felipe Kreulich"),
    ("footer.blog", "Visit my blog"),
    // Navigation
    ("nav.intro", "Intro"),
    ("nav.about", "About"),
    ("nav.work", "Work"),
    ("nav.projects", "Projects"),
    ("nav.services", "Services"),
    ("nav.thoughts", "Thoughts"),
    ("nav.calendar", "Calendar"),
    ("nav.coffee", "Coffee"),
    ("nav.connect", "Connect"),
];

const PT_STRINGS: &[(&str, &str)] = &[
    // Header
    ("portfolio.year", "PORTFÓLIO / 2025"),
    ("intro.title", "Felipe"),
    ("intro.subtitle", "Kreulich"),
    (
        "intro.description",
        "Full Stack Developer criando experiências digitais na interseção entre",
    ),
    ("intro.design", "design"),
    ("intro.technology", "tecnologia"),
    ("intro.and", "e"),
    ("intro.human_behavior", "comportamento humano"),
    ("intro.available", "Disponível para trabalho"),
    ("intro.location", "Lisboa, Portugal"),
    ("intro.cv_download", "Download CV"),
    ("intro.currently", "ATUALMENTE"),
    ("intro.role", "Full Stack Developer"),
    ("intro.company", "@ POP Tecnologia e Mobilidade"),
    ("intro.period", "2025 — Presente"),
    ("intro.focus", "FOCO"),
    // About Section
    ("about.title", "Sobre Mim"),
    (
        "about.description",
        "Um desenvolvedor apaixonado que adora criar experiências digitais significativas.",
    ),
    ("about.age", "Idade"),
    ("about.age_value", "23 anos"),
    ("about.location_full", "Lisboa, Portugal"),
    ("about.interests", "Interesses"),
    ("about.interests_list", "Tecnologia, Design, Música, Viagens"),
    ("about.available_for", "Disponível para"),
    ("about.available_for_value", "Freelance & Tempo integral"),
    // Work Section
    ("work.title", "Trabalhos Selecionados"),
    ("work.period", "2021 — 2025"),
    (
        "work.army.role",
        "Suporte Técnico e Desenvolvedor Full Stack",
    ),
    ("work.army.company", "9º Batalhão de Polícia do Exército"),
    (
        "work.army.description",
        "Atuei como Suporte Técnico e Desenvolvedor Full Stack. Prestava suporte técnico aos colaboradores e desenvolvia soluções para o dia a dia do batalhão.",
    ),
    ("work.cstc.role", "Desenvolvedor Full Stack"),
    ("work.cstc.company", "CSTC"),
    (
        "work.cstc.description",
        "Atuei como Desenvolvedor Full Stack. Desenvolvi uma aplicação para gestão de pessoas, foi uma experiência muito gratificante.",
    ),
    ("work.pop.role", "Desenvolvedor Full Stack"),
    ("work.pop.company", "POP Tecnologia e Mobilidade"),
    (
        "work.pop.description",
        "Atuei como Desenvolvedor Full Stack. Não posso dizer muito sobre o projeto, mas foi uma experiência muito gratificante.",
    ),
    ("work.az.role", "Analista de Suporte e Desenvolvedor Fullstack"),
    ("work.az.company", "AZ Tecnologia e Gestao"),
    (
        "work.az.description",
        "Na AZ atuei como analista e desenvolvedor fullstack, no desenvolvimento de ferramentas internas para uso no suporte.",
    ),
    // Projects Section
    ("projects.title", "Projetos em Destaque"),
    (
        "projects.description",
        "Uma seleção dos meus trabalhos recentes e projetos pessoais.",
    ),
    ("projects.portfolio.title", "Website Portfolio"),
    (
        "projects.portfolio.description",
        "Portfolio moderno construído com Next.js, TypeScript e Tailwind CSS. Inclui tema escuro/claro, suporte multilíngue e design responsivo.",
    ),
    ("projects.portfolio.tech", "Next.js, TypeScript, Tailwind CSS"),
    ("projects.portfolio.link", "Ver Projeto"),
    ("projects.wormhole.title", "Worm Hole"),
    (
        "projects.wormhole.description",
        "Worm Hole é um projeto pessoal que desenvolvi: uma plataforma para transferência e envio de arquivos através de links seguros. Transformei-o em um SaaS, atualmente em fase de testes, e em breve estará disponível para todos.",
    ),
    (
        "projects.wormhole.tech",
        "Next.JS, TypeScript, Tailwind CSS, Prisma, NeonDB, Vercel, MySQL",
    ),
    ("projects.wormhole.link", "Ver Projeto"),
    ("projects.blog.title", "Blog Pessoal"),
    (
        "projects.blog.description",
        "Blog pessoal construído com Next.js, TypeScript e Tailwind CSS. Inclui tema escuro/claro, suporte multilíngue e design responsivo.",
    ),
    (
        "projects.blog.tech",
        "Next.js, TypeScript, Tailwind CSS, Prisma, NeonDB, Vercel, MySQL",
    ),
    ("projects.blog.link", "Ver Projeto"),
    ("projects.technologies", "Tecnologias"),
    // Services Section
    ("services.title", "Serviços"),
    (
        "services.description",
        "Como posso ajudar a tirar a sua próxima ideia do papel.",
    ),
    ("services.development.title", "Desenvolvimento Web"),
    (
        "services.development.description",
        "Aplicações web modernas, rápidas e acessíveis, de landing pages a produtos completos.",
    ),
    (
        "services.development.features",
        "Next.js & React, APIs REST, Bancos de dados",
    ),
    ("services.design.title", "Design UI/UX"),
    (
        "services.design.description",
        "Interfaces naturais, apoiadas em design systems que escalam.",
    ),
    (
        "services.design.features",
        "Design Systems, Prototipagem, Acessibilidade",
    ),
    ("services.maintenance.title", "Manutenção & Suporte"),
    (
        "services.maintenance.description",
        "Mantendo o seu produto saudável com monitoramento, correções e melhorias contínuas.",
    ),
    (
        "services.maintenance.features",
        "Monitoramento, Correções, Performance",
    ),
    ("services.consulting.title", "Consultoria"),
    (
        "services.consulting.description",
        "Orientação técnica para times e fundadores em decisões de produto.",
    ),
    (
        "services.consulting.features",
        "Arquitetura, Revisão de código, Mentoria",
    ),
    ("services.contact.title", "Tem um projeto em mente?"),
    (
        "services.contact.description",
        "Me conte sobre ele e retorno em até um dia.",
    ),
    ("services.contact.quote_subject", "Pedido de orçamento de projeto"),
    ("services.contact.quote_button", "Pedir orçamento"),
    ("services.contact.question_subject", "Dúvida sobre serviços"),
    ("services.contact.question_button", "Tirar uma dúvida"),
    // Thoughts / Blog Section
    ("thoughts.read_more", "Ler mais"),
    (
        "thoughts.feature_coming_soon",
        "Esta funcionalidade ainda está sendo adicionada. Em breve!",
    ),
    ("blog.badge", "Novos posts toda semana"),
    ("blog.title", "Pensamentos & Escrita"),
    (
        "blog.description",
        "Notas sobre engenharia de software, design e a arte de construir para a web.",
    ),
    ("blog.cta", "Visitar o blog"),
    ("blog.topic1.title", "O Futuro do Desenvolvimento Web"),
    (
        "blog.topic1.description",
        "Explorando como a IA e automação estão a reformular a forma como construímos para a web.",
    ),
    ("blog.topic2.title", "Sistemas de Design em Escala"),
    (
        "blog.topic2.description",
        "Lições aprendidas ao construir e manter sistemas de design em múltiplos produtos.",
    ),
    ("blog.topic3.title", "Desenvolvimento com Foco na Performance"),
    (
        "blog.topic3.description",
        "Por que a performance deve ser um cidadão de primeira classe no seu fluxo de trabalho de desenvolvimento.",
    ),
    ("blog.footer_text", "Prefere textos longos?"),
    ("blog.footer_cta", "Ler todos os posts"),
    // Calendar Section
    ("calendar.title", "Agende uma Reunião"),
    (
        "calendar.description",
        "Vamos conversar sobre seu projeto e como posso ajudar!",
    ),
    // Coffee Section
    ("coffee.badge", "Apoie meu trabalho"),
    ("coffee.title", "Me pague um café"),
    (
        "coffee.description",
        "Se algo que construí ou escrevi te ajudou, um café mantém os projetos pessoais vivos.",
    ),
    ("coffee.feature1", "Combustível para codar de madrugada"),
    ("coffee.feature2", "Mais experimentos open-source"),
    ("coffee.feature3", "Novos posts e tutoriais"),
    ("coffee.cta", "Me pague um café"),
    ("coffee.thanks", "Obrigado pelo apoio!"),
    // Connect Section
    ("connect.title", "Vamos Conectar"),
    (
        "connect.description",
        "Sempre interessado em novas oportunidades, colaborações e conversas sobre tecnologia e design.",
    ),
    ("connect.email", "contato.felipe.kreulich@gmail.com"),
    ("connect.elsewhere", "OUTROS SÍTIOS"),
    // Footer
    (
        "footer.copyright",
        "© 2025 Felipe Kreulich. Todos os direitos reservados.",
    ),
    ("footer.built_with", "Construído com ❤️ por Felipe Kreulich"),
    ("footer.blog", "Visite meu blog"),
    // Navigation
    ("nav.intro", "Introdução"),
    ("nav.about", "Sobre"),
    ("nav.work", "Trabalho"),
    ("nav.projects", "Projetos"),
    ("nav.services", "Serviços"),
    ("nav.thoughts", "Pensamentos"),
    ("nav.calendar", "Agenda"),
    ("nav.coffee", "Café"),
    ("nav.connect", "Conectar"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn unknown_keys_fall_back_to_the_key_itself() {
        assert_eq!(translate(Language::En, "no.such.key"), "no.such.key");
        assert_eq!(translate(Language::Pt, "no.such.key"), "no.such.key");
        assert_eq!(translate(Language::En, ""), "");
    }

    #[test]
    fn known_keys_resolve_in_both_languages() {
        assert_eq!(translate(Language::En, "work.title"), "Selected Work");
        assert_eq!(translate(Language::Pt, "work.title"), "Trabalhos Selecionados");
        assert_eq!(translate(Language::En, "nav.coffee"), "Coffee");
        assert_eq!(translate(Language::Pt, "nav.coffee"), "Café");
    }

    #[test]
    fn catalogs_are_key_isomorphic() {
        let en: HashSet<&str> = EN_STRINGS.iter().map(|(k, _)| *k).collect();
        let pt: HashSet<&str> = PT_STRINGS.iter().map(|(k, _)| *k).collect();
        let only_en: Vec<&&str> = en.difference(&pt).collect();
        let only_pt: Vec<&&str> = pt.difference(&en).collect();
        assert!(
            only_en.is_empty() && only_pt.is_empty(),
            "catalogs diverge: en-only {only_en:?}, pt-only {only_pt:?}"
        );
    }

    #[test]
    fn catalogs_have_no_duplicate_keys() {
        for strings in [EN_STRINGS, PT_STRINGS] {
            let unique: HashSet<&str> = strings.iter().map(|(k, _)| *k).collect();
            assert_eq!(unique.len(), strings.len());
        }
    }

    #[test]
    fn language_codes_parse_strictly() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert_eq!("pt".parse::<Language>().unwrap(), Language::Pt);
        assert!("pt-PT".parse::<Language>().is_err());
        assert!("EN".parse::<Language>().is_err());
        assert!("".parse::<Language>().is_err());
    }

    #[test]
    fn toggle_is_a_binary_flip() {
        assert_eq!(Language::En.toggled(), Language::Pt);
        assert_eq!(Language::Pt.toggled(), Language::En);
        assert_eq!(Language::En.toggled().toggled(), Language::En);
    }

    #[test]
    fn document_lang_maps_pt_to_regional_tag() {
        assert_eq!(Language::En.document_lang(), "en");
        assert_eq!(Language::Pt.document_lang(), "pt-PT");
    }

    #[test]
    fn storage_literal_round_trips() {
        for lang in [Language::En, Language::Pt] {
            assert_eq!(lang.as_str().parse::<Language>().unwrap(), lang);
        }
    }
}
