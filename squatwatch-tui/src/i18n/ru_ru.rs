//! Russian translations (ru-RU)

use super::keys::{
    CommonTexts, ConfirmWhitelistTexts, ErrorModalTexts, HelpTexts, ModalTexts, StatusBarTexts,
    Translations, WatchlistTexts,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Squatwatch",
        cancel: "Отмена",
        close: "Закрыть",
    },

    watchlist: WatchlistTexts {
        title: "Опасные домены",
        updated_label: "Данные актуальны на:",
        col_index: "№",
        col_url: "Адрес сайта",
        col_registrar: "Регистратор",
        col_abuse_emails: "Абуз-почта",
        col_owner: "Владелец",
        unknown_owner: "Неизвестен",
        unknown_emails: "Неизвестна",
        empty: "Опасных доменов в списке нет.",
        empty_hint: "Нажмите r, чтобы обновить список.",
        load_failed: "Не удалось загрузить список",
        retry_hint: "Нажмите r, чтобы повторить попытку.",
    },

    modal: ModalTexts {
        confirm_whitelist: ConfirmWhitelistTexts {
            title: "Убрать из списка",
            question: "Отметить домен как безопасный и убрать его?",
            confirm: "Убрать",
        },
        error: ErrorModalTexts {
            whitelist_title: "Не удалось убрать домен",
            export_title: "Ошибка экспорта",
            close_hint: "Нажмите Esc или Enter, чтобы закрыть",
        },
    },

    status_bar: StatusBarTexts {
        navigate: "Навигация",
        whitelist: "Убрать",
        refresh: "Обновить",
        export: "Экспорт",
        help: "Помощь",
        quit: "Выход",
        loaded: "Загружено опасных доменов:",
        refreshing: "Обновление...",
        whitelisted: "Убран из списка:",
        exported: "Экспортировано в",
        export_empty: "Нечего экспортировать",
    },

    help: HelpTexts {
        title: "Помощь",
        section_table: "Таблица",
        section_dialog: "Диалоги",
        navigate: "Переместить выделение",
        whitelist: "Убрать выделенный домен",
        refresh: "Обновить список",
        export: "Экспортировать таблицу в CSV",
        help: "Показать эту справку",
        quit: "Выйти",
        switch_button: "Переключить кнопку",
        activate: "Нажать выделенную кнопку",
        close_dialog: "Закрыть диалог",
        close_hint: "Нажмите Esc, чтобы закрыть справку",
    },
};
