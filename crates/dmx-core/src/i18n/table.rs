//! The UI string table, built once from a catalog.

use super::MessageCatalog;
use std::collections::BTreeMap;

/// UI string name and the catalog message it is read from.
pub const I18N_KEYS: &[(&str, &str)] = &[
    // background notifications
    ("deleteNotification", "deleteNotification"),
    ("downloadCompletedNotification", "downloadCompletedNotification"),
    ("downloadStartedNotification", "downloadStartedNotification"),
    ("downloadWarnNotification", "downloadWarnNotification"),
    ("openFolderNotification", "openFolderNotification"),
    ("openFile", "openFile"),
    // popup toolbar
    ("newDownload", "newDownload"),
    ("openDownloadFolder", "openDownloadFolder"),
    ("openSettings", "openSettings"),
    ("openHome", "openHome"),
    ("newDownloadPlaceholder", "newDownloadPlaceholder"),
    // clear menu
    ("clearAll", "clearAll"),
    ("deleteAll", "deleteAll"),
    ("clearFailed", "clearFailed"),
    ("clearAbsent", "clearAbsent"),
    // speed and time units
    ("second", "second"),
    ("minute", "minute"),
    ("hour", "hour"),
    ("day", "day"),
    // per-download actions
    ("openFileInFolder", "openFileInFolder"),
    ("pause", "pause"),
    ("resume", "resume"),
    ("delete", "delete"),
    ("retry", "retry"),
    ("erase", "erase"),
    ("clearPopConfirmText", "el_popconfirm_confirmButtonText"),
    ("clearPopCancelText", "el_popconfirm_cancelButtonText"),
    // dangerous downloads
    ("dangerDescription", "dangerDescription"),
    ("cancel", "cancel"),
    ("reserve", "reserve"),
    ("copied", "copied"),
    // context menus
    ("prefixMenus", "prefixMenus"),
    ("link", "link"),
    ("image", "image"),
    ("audio", "audio"),
    ("video", "video"),
    // options sidebar
    ("extensionName", "extName"),
    ("settingsTitle", "settingsTitle"),
    ("themeTitle", "themeTitle"),
    ("aboutTitle", "aboutTitle"),
    // download settings
    ("downloadSetting", "downloadSetting"),
    ("leftClickFileSetting", "leftClickFileSetting"),
    ("rightClickFileSetting", "rightClickFileSetting"),
    ("leftClickUrlSetting", "leftClickUrlSetting"),
    ("rightClickUrlSetting", "rightClickUrlSetting"),
    ("showTooltipSetting", "showTooltipSetting"),
    ("enableAnimation", "enableAnimation"),
    ("contextMenus", "contextMenus"),
    ("downloadContextMenusSetting", "downloadContextMenusSetting"),
    ("downloadContextMenusDescSetting", "downloadContextMenusDescSetting"),
    // notification settings
    ("notificationSetting", "notificationSetting"),
    ("downloadNotificationSetting", "downloadNotificationSetting"),
    ("downloadNotificationSetting1", "downloadNotificationSetting1"),
    ("downloadNotificationSetting2", "downloadNotificationSetting2"),
    ("downloadNotificationSetting3", "downloadNotificationSetting3"),
    ("downloadNotificationReservedTimeSetting", "downloadNotificationReservedTimeSetting"),
    ("downloadNotificationRemainVisibleSetting", "downloadNotificationRemainVisibleSetting"),
    ("downloadNotificationRemainVisibleDescSetting", "downloadNotificationRemainVisibleDescSetting"),
    ("downloadToneSetting", "downloadToneSetting"),
    // shortcuts
    ("shortcutSetting", "shortcutSetting"),
    ("openPopupSetting", "openPopupSetting"),
    ("openPopupDetailsSetting", "openPopupDetailsSetting"),
    ("chromePluginShortcutDescSetting", "chromePluginShortcutDescSetting"),
    // sync
    ("syncSetting", "syncSetting"),
    ("pluginSyncSetting", "pluginSyncSetting"),
    ("pluginSyncDetailsSetting", "pluginSyncDetailsSetting"),
    ("notSyncSetting", "notSyncSetting"),
    // theme
    ("iconTitle", "iconTitle"),
    ("themeAdaptation", "themeAdaptation"),
    ("themeAdaptationDescription", "themeAdaptationDescription"),
    ("themeAdaptationOption1", "themeAdaptationOption1"),
    ("themeAdaptationOption2", "themeAdaptationOption2"),
    ("themeAdaptationOption3", "themeAdaptationOption3"),
    ("iconColorSetting", "iconColorSetting"),
    ("iconDownloadingColorSetting", "iconDownloadingColorSetting"),
    ("downloadPanelTitle", "downloadPanelTitle"),
    ("downloadPanelThemeCustomDescription", "downloadPanelThemeCustomDescription"),
    ("pageSize", "pageSize"),
    // about
    ("starAbout1", "starAbout1"),
    ("pluginShopAbout", "pluginShopAbout"),
    ("starAbout2", "starAbout2"),
    ("versionAbout", "versionAbout"),
];

/// Read-only UI string table.
///
/// Every name in `I18N_KEYS` is present; a message missing from the catalog
/// maps to the empty string, matching what the platform catalog returns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translations {
    entries: BTreeMap<&'static str, String>,
}

impl Translations {
    pub fn load(catalog: &dyn MessageCatalog) -> Self {
        let mut missing = 0usize;
        let entries = I18N_KEYS
            .iter()
            .map(|&(name, key)| {
                let text = catalog.message(key).unwrap_or_else(|| {
                    missing += 1;
                    String::new()
                });
                (name, text)
            })
            .collect();
        if missing > 0 {
            tracing::debug!(missing, "catalog lacks some UI messages");
        }
        Self { entries }
    }

    /// Text for a UI string name; unknown names map to "".
    pub fn get(&self, name: &str) -> &str {
        self.lookup(name).unwrap_or("")
    }

    /// Like `get`, but `None` for names outside `I18N_KEYS`.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.entries.iter().map(|(name, text)| (*name, text.as_str()))
    }
}
