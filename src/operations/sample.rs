/// Demo notes in the default (Russian) marker format.
pub const SAMPLE_TEXT: &str = "Компания: TopCareer
Инсайты:
- Онлайн-школа для HR с сообществом 50 000+ специалистов, создаёт курсы для роста HR-лидеров
- Резидент «Сколково» и победитель Recruitment Awards 2024
- Разработала 20+ программ обучения (HRD, HRBP и др.), активно освещает тренды HR Tech
- Организатор онлайн-конференций (#АнтиконфаHR, People vs Data и др.)
- Поддерживается фондом «Сколково», способствует цифровизации HR-обучения

Компания: ECCO East
Инсайты:
- Российское подразделение ECCO, сохранившее работу на рынке и локализующее процессы
- Онлайн-продажи выросли в 10 раз в 2020, сейчас фокус на омниканальности
- Внедрило CVM-маркетинг, рост выручки с базы +51% в 2023
- Активно внедряет ERP, loyalty-программу и дашборды
- Развивает гибридные офисы-хабы для удалёнки

Компания: Ассоциация организационного развития
Инсайты:
- Первое сообщество экспертов по оргразвитию в РФ и СНГ
- Проводит форумы и вебинары о цифровизации HR и применении ИИ
- Недавний вебинар «HR на автопилоте» (сентябрь 2025)
- Создала «Центр нормирования» – площадку стандартов
- Объединяет 100+ HRD и консультантов по гибридным форматам работы";
