// --- File: src/zarinpal/messages.rs ---

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::config::Language;

const UNKNOWN_EN: &str = "Unknown error.";
const UNKNOWN_FA: &str = "خطای ناشناخته.";

// (code, english, persian)
const ENTRIES: &[(i64, &str, &str)] = &[
    // v4 API
    (-9, "Validation error.", "خطای اعتبار سنجی."),
    (
        -10,
        "Terminal is not valid, please check merchant_id or ip address.",
        "آی پی و یا مرچنت کد پذیرنده صحیح نیست.",
    ),
    (
        -11,
        "Terminal is not active, please contact our support team.",
        "مرچنت کد فعال نیست، لطفا با تیم پشتیبانی تماس بگیرید.",
    ),
    (
        -12,
        "Too many attempts, please try again later.",
        "تلاش بیش از حد در یک بازه زمانی کوتاه.",
    ),
    (
        -15,
        "Terminal user is suspended, please contact our support team.",
        "ترمینال شما به حالت تعلیق در آمده است، با تیم پشتیبانی تماس بگیرید.",
    ),
    (
        -16,
        "Terminal user level is not valid, please contact our support team.",
        "سطح تایید پذیرنده پایین تر از سطح نقره ای است.",
    ),
    (
        -30,
        "Terminal does not allow to accept floating wages.",
        "اجازه دسترسی به تسویه اشتراکی شناور ندارید.",
    ),
    (
        -31,
        "Terminal does not allow to accept wages, please add default bank account in panel.",
        "حساب بانکی تسویه را به پنل اضافه کنید.",
    ),
    (
        -32,
        "Wages is not valid, total wages (floating) has been overload max amount.",
        "مبلغ وارد شده برای تسهیم از سقف مجاز بیشتر است.",
    ),
    (
        -33,
        "Wages floating is not valid.",
        "درصدهای وارد شده برای تسهیم صحیح نیست.",
    ),
    (
        -34,
        "Wages is not valid, total wages (fixed) has been overload max amount.",
        "مبلغ وارد شده از کل تراکنش بیشتر است.",
    ),
    (
        -35,
        "Wages is not valid, total wages (floating) has been reached the limit in max parts.",
        "تعداد افراد دریافت کننده تسهیم بیش از حد مجاز است.",
    ),
    (
        -40,
        "Invalid extra params, expire_in is not valid.",
        "پارامترهای اضافی نامعتبر است، expire_in معتبر نیست.",
    ),
    (
        -50,
        "Session is not valid, amounts values is not the same.",
        "مبلغ پرداخت شده با مبلغ ارسالی در متد وریفای متفاوت است.",
    ),
    (
        -51,
        "Session is not valid, session is not active paid try.",
        "پرداخت ناموفق.",
    ),
    (
        -52,
        "Oops! Please contact our support team.",
        "خطای غیر منتظره، با پشتیبانی تماس بگیرید.",
    ),
    (
        -53,
        "Session is not this merchant_id session.",
        "اتوریتی برای این مرچنت کد نیست.",
    ),
    (-54, "Invalid authority.", "اتوریتی نامعتبر است."),
    (
        -55,
        "Manual payment request not found.",
        "تراکنش مورد نظر یافت نشد.",
    ),
    // legacy WebGate codes that do not clash with v4
    (
        -1,
        "Information submitted is incomplete.",
        "اطلاعات ارسال شده ناقص است.",
    ),
    (
        -2,
        "Merchant ID or acceptor IP address is not correct.",
        "آی پی و یا مرچنت کد پذیرنده صحیح نیست.",
    ),
    (
        -3,
        "Amount should be above 100 Toman.",
        "با توجه به محدودیت های شاپرک امکان پرداخت با رقم درخواست شده میسر نمی باشد.",
    ),
    (
        -4,
        "Approved level of acceptor is lower than the silver.",
        "سطح تایید پذیرنده پایین تر از سطح نقره ای است.",
    ),
    (
        -21,
        "No financial operation found for this transaction.",
        "هیچ نوع عملیات مالی برای این تراکنش یافت نشد.",
    ),
    (-22, "Transaction is unsuccessful.", "تراکنش ناموفق می باشد."),
    (
        -41,
        "Invalid AdditionalData.",
        "اطلاعات ارسال شده مربوط به AdditionalData غیر معتبر می باشد.",
    ),
    (
        -42,
        "Authority lifetime must be between 30 minutes and 45 days.",
        "مدت زمان معتبر طول عمر شناسه پرداخت باید بین ۳۰ دقیقه تا ۴۵ روز باشد.",
    ),
    // success
    (100, "Success.", "عملیات موفق."),
    (
        101,
        "Transaction already verified.",
        "تراکنش قبلا وریفای شده است.",
    ),
];

static MESSAGES: Lazy<HashMap<(Language, i64), &'static str>> = Lazy::new(|| {
    ENTRIES
        .iter()
        .flat_map(|&(code, en, fa)| [((Language::En, code), en), ((Language::Fa, code), fa)])
        .collect()
});

/// Returns the message for `code` in `language`, or the language's "unknown error" message.
pub fn lookup(language: Language, code: i64) -> &'static str {
    MESSAGES
        .get(&(language, code))
        .copied()
        .unwrap_or_else(|| unknown(language))
}

/// Message returned for codes missing from the table.
pub fn unknown(language: Language) -> &'static str {
    match language {
        Language::En => UNKNOWN_EN,
        Language::Fa => UNKNOWN_FA,
    }
}
