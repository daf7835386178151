mod i18n_completeness;
