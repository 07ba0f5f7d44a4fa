//! Host-framework settings carried through untouched
//!
//! Middleware chains, installed modules, template options and similar values
//! belong to whichever web framework hosts the service. They are stored as an
//! opaque table and never interpreted here.

use std::collections::BTreeMap;

use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct FrameworkSettings {
    entries: BTreeMap<String, Value>,
}

impl FrameworkSettings {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for FrameworkSettings {
    fn default() -> Self {
        let entries = [
            (
                "INSTALLED_APPS",
                json!([
                    "corsheaders",
                    "about.apps.AboutAppConfig",
                    "chains.apps.AppsConfig",
                    "safe_apps.apps.AppsConfig",
                    "django.contrib.admin",
                    "django.contrib.auth",
                    "django.contrib.contenttypes",
                    "django.contrib.sessions",
                    "django.contrib.messages",
                    "django.contrib.staticfiles",
                    "rest_framework",
                    "drf_yasg"
                ]),
            ),
            (
                "MIDDLEWARE",
                json!([
                    "config.middleware.LoggingMiddleware",
                    "corsheaders.middleware.CorsMiddleware",
                    "django.middleware.security.SecurityMiddleware",
                    "django.contrib.sessions.middleware.SessionMiddleware",
                    "django.middleware.common.CommonMiddleware",
                    "django.middleware.csrf.CsrfViewMiddleware",
                    "django.contrib.auth.middleware.AuthenticationMiddleware",
                    "django.contrib.messages.middleware.MessageMiddleware",
                    "django.middleware.clickjacking.XFrameOptionsMiddleware"
                ]),
            ),
            (
                "REST_FRAMEWORK",
                json!({
                    "DEFAULT_RENDERER_CLASSES": [
                        "djangorestframework_camel_case.render.CamelCaseJSONRenderer"
                    ],
                    "DEFAULT_VERSIONING_CLASS": "rest_framework.versioning.NamespaceVersioning"
                }),
            ),
            (
                "CACHES",
                json!({
                    "default": { "BACKEND": "django.core.cache.backends.locmem.LocMemCache" },
                    "safe-apps": { "BACKEND": "django.core.cache.backends.locmem.LocMemCache" }
                }),
            ),
            (
                "TEMPLATES",
                json!([{
                    "BACKEND": "django.template.backends.django.DjangoTemplates",
                    "DIRS": ["templates/"],
                    "APP_DIRS": true,
                    "OPTIONS": {
                        "context_processors": [
                            "django.template.context_processors.debug",
                            "django.template.context_processors.request",
                            "django.contrib.auth.context_processors.auth",
                            "django.contrib.messages.context_processors.messages"
                        ]
                    }
                }]),
            ),
            (
                "AUTH_PASSWORD_VALIDATORS",
                json!([
                    { "NAME": "django.contrib.auth.password_validation.UserAttributeSimilarityValidator" },
                    { "NAME": "django.contrib.auth.password_validation.MinimumLengthValidator" },
                    { "NAME": "django.contrib.auth.password_validation.CommonPasswordValidator" },
                    { "NAME": "django.contrib.auth.password_validation.NumericPasswordValidator" }
                ]),
            ),
            ("ROOT_URLCONF", json!("config.urls")),
            ("WSGI_APPLICATION", json!("config.wsgi.application")),
            ("LANGUAGE_CODE", json!("en-us")),
            ("TIME_ZONE", json!("UTC")),
            ("USE_I18N", json!(true)),
            ("USE_TZ", json!(true)),
            ("DEFAULT_AUTO_FIELD", json!("django.db.models.BigAutoField")),
            (
                "SWAGGER_SETTINGS",
                json!({
                    "DEFAULT_INFO": "config.swagger_info.SAFE_CONFIG_SERVICE_SWAGGER_INFO"
                }),
            ),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect();

        Self { entries }
    }
}
