//! Windows-specific providers using `GetAdaptersAddresses` and the registry.
//!
//! Enumeration goes through the IP Helper API; the power-management flag and
//! the advanced-property list are read from the adapter's driver key under
//! the network adapter class in the registry, which is where NDIS drivers
//! register their tunables (`Ndi\params`) and the PnP power capabilities.

use crate::network::{
    AdapterEnumerator, AdapterInfo, AdapterKind, AdapterProperty, AdvancedPropertyProvider,
    PowerManagement, PowerManagementProvider, PropertyValue, ProviderError,
};
use windows::Win32::Foundation::{
    ERROR_FILE_NOT_FOUND, ERROR_NO_MORE_ITEMS, ERROR_SUCCESS, WIN32_ERROR,
};
use windows::Win32::NetworkManagement::IpHelper::{
    GAA_FLAG_SKIP_ANYCAST, GAA_FLAG_SKIP_DNS_SERVER, GAA_FLAG_SKIP_MULTICAST,
    GAA_FLAG_SKIP_UNICAST, GetAdaptersAddresses, IF_TYPE_ETHERNET_CSMACD, IF_TYPE_IEEE80211,
    IF_TYPE_SOFTWARE_LOOPBACK, IP_ADAPTER_ADDRESSES_LH,
};
use windows::Win32::Networking::WinSock::AF_UNSPEC;
use windows::Win32::System::Registry::{
    HKEY, HKEY_LOCAL_MACHINE, KEY_READ, REG_BINARY, REG_DWORD, REG_EXPAND_SZ, REG_MULTI_SZ,
    REG_QWORD, REG_SZ, REG_VALUE_TYPE, RegCloseKey, RegEnumKeyExW, RegOpenKeyExW,
    RegQueryValueExW,
};
use windows::core::{PCWSTR, PWSTR};

/// Interface type for PPP (Point-to-Point Protocol) adapters.
/// Value from Windows SDK `iptypes.h` - not exported by the `windows` crate.
const IF_TYPE_PPP: u32 = 23;

/// Interface type for tunnel adapters (VPN, etc.).
/// Value from Windows SDK `iptypes.h` - not exported by the `windows` crate.
const IF_TYPE_TUNNEL: u32 = 131;

/// Buffer size hint for `GetAdaptersAddresses`.
/// The API will tell us the actual required size if this is insufficient.
const INITIAL_BUFFER_SIZE: u32 = 16384;

/// Registry path of the network adapter device class.
const NETWORK_CLASS_KEY: &str =
    r"SYSTEM\CurrentControlSet\Control\Class\{4D36E972-E325-11CE-BFC1-08002BE10318}";

/// `PnPCapabilities` bit that forbids powering the device off.
const PNP_DISABLE_POWER_OFF: u32 = 0x10;

/// Windows implementation of [`AdapterEnumerator`] using `GetAdaptersAddresses`.
#[derive(Debug, Clone, Default)]
pub struct WindowsEnumerator {
    _private: (),
}

impl WindowsEnumerator {
    /// Creates a new Windows adapter enumerator.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl AdapterEnumerator for WindowsEnumerator {
    fn list_all(&self) -> Result<Vec<AdapterInfo>, ProviderError> {
        enumerate_adapters()
    }
}

/// Enumerates all network adapters using `GetAdaptersAddresses`.
fn enumerate_adapters() -> Result<Vec<AdapterInfo>, ProviderError> {
    let raw_adapters = get_adapter_addresses()?;

    let mut adapters = Vec::new();
    // SAFETY: GetAdaptersAddresses returns a properly aligned buffer for IP_ADAPTER_ADDRESSES_LH.
    // The Windows API guarantees alignment of the returned data structures.
    #[allow(clippy::cast_ptr_alignment)]
    let mut current = raw_adapters.as_ptr().cast::<IP_ADAPTER_ADDRESSES_LH>();

    // SAFETY: We iterate through a linked list returned by GetAdaptersAddresses.
    // The list is valid as long as the buffer (`raw_adapters`) is alive.
    while !current.is_null() {
        let adapter = unsafe { &*current };

        if let Some(info) = parse_adapter(adapter) {
            adapters.push(info);
        }

        current = adapter.Next;
    }

    Ok(adapters)
}

/// Calls `GetAdaptersAddresses` and returns the raw buffer containing adapter data.
///
/// This function handles the two-call pattern:
/// 1. First call with estimated buffer size
/// 2. Retry with exact size if buffer was too small
///
/// # Coverage Note
///
/// Excluded from coverage: the overflow retry requires a system whose
/// adapter data exceeds 16KB, and the error paths require real API failures.
#[cfg(not(tarpaulin_include))]
fn get_adapter_addresses() -> Result<Vec<u8>, ProviderError> {
    use windows::Win32::Foundation::{ERROR_BUFFER_OVERFLOW, NO_ERROR};

    // Identity only - skip all address lists the report does not need.
    let flags = GAA_FLAG_SKIP_ANYCAST
        | GAA_FLAG_SKIP_MULTICAST
        | GAA_FLAG_SKIP_DNS_SERVER
        | GAA_FLAG_SKIP_UNICAST;
    let family = u32::from(AF_UNSPEC.0);

    let mut buffer: Vec<u8> = vec![0u8; INITIAL_BUFFER_SIZE as usize];
    let mut size = INITIAL_BUFFER_SIZE;

    // SAFETY: We provide a valid buffer and size. The function writes adapter
    // information to the buffer and updates `size` with the required length.
    let mut result = unsafe {
        GetAdaptersAddresses(
            family,
            flags,
            None,
            Some(buffer.as_mut_ptr().cast()),
            &raw mut size,
        )
    };

    if result == ERROR_BUFFER_OVERFLOW.0 {
        buffer.resize(size as usize, 0);

        // SAFETY: Same as above, but with correctly sized buffer
        result = unsafe {
            GetAdaptersAddresses(
                family,
                flags,
                None,
                Some(buffer.as_mut_ptr().cast()),
                &raw mut size,
            )
        };
    }

    if result != NO_ERROR.0 {
        return Err(windows::core::Error::from(WIN32_ERROR(result)).into());
    }

    Ok(buffer)
}

/// Parses a single `IP_ADAPTER_ADDRESSES_LH` structure into an [`AdapterInfo`].
///
/// Returns `None` if the adapter's names cannot be read.
fn parse_adapter(adapter: &IP_ADAPTER_ADDRESSES_LH) -> Option<AdapterInfo> {
    // SAFETY: FriendlyName and Description are valid wide strings while the
    // adapter buffer is alive; AdapterName is the ANSI interface GUID.
    let name = unsafe { adapter.FriendlyName.to_string().ok()? };
    let description = unsafe { adapter.Description.to_string().ok()? };
    let id = unsafe { adapter.AdapterName.to_string().ok()? };

    let kind = map_adapter_type(adapter.IfType);

    Some(AdapterInfo::new(name, description, id, kind))
}

/// Maps Windows `IF_TYPE_*` constants to [`AdapterKind`].
const fn map_adapter_type(if_type: u32) -> AdapterKind {
    match if_type {
        IF_TYPE_ETHERNET_CSMACD => AdapterKind::Ethernet,
        IF_TYPE_IEEE80211 => AdapterKind::Wireless,
        IF_TYPE_SOFTWARE_LOOPBACK => AdapterKind::Loopback,
        // Common virtual adapter types (tunnel, PPP, etc.)
        IF_TYPE_TUNNEL | IF_TYPE_PPP => AdapterKind::Virtual,
        other => AdapterKind::Other(other),
    }
}

// ============================================================================
// Registry plumbing
// ============================================================================

/// Owned registry key handle, closed on drop.
struct RegKey(HKEY);

impl Drop for RegKey {
    fn drop(&mut self) {
        // SAFETY: self.0 is an open key handle owned by this value.
        unsafe {
            let _ = RegCloseKey(self.0);
        }
    }
}

/// Encodes a nul-terminated UTF-16 string for registry calls.
fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

impl RegKey {
    /// Opens a subkey of `parent` read-only.
    fn open(parent: HKEY, path: &str) -> Result<Self, ProviderError> {
        let wide = to_wide(path);
        let mut handle = HKEY::default();

        // SAFETY: `wide` is nul-terminated and outlives the call; `handle`
        // receives the opened key.
        let result = unsafe {
            RegOpenKeyExW(
                parent,
                PCWSTR::from_raw(wide.as_ptr()),
                Some(0),
                KEY_READ,
                &raw mut handle,
            )
        };

        if result != ERROR_SUCCESS {
            return Err(windows::core::Error::from(result).into());
        }

        Ok(Self(handle))
    }

    /// Opens a subkey of this key read-only.
    fn open_subkey(&self, path: &str) -> Result<Self, ProviderError> {
        Self::open(self.0, path)
    }

    /// Enumerates the names of this key's immediate subkeys.
    fn subkey_names(&self) -> Result<Vec<String>, ProviderError> {
        let mut names = Vec::new();

        for index in 0.. {
            // Registry key names are at most 255 characters.
            let mut buffer = [0u16; 256];
            let mut len = buffer.len() as u32;

            // SAFETY: `buffer` is writable for `len` UTF-16 units; the API
            // updates `len` with the name length on success.
            let result = unsafe {
                RegEnumKeyExW(
                    self.0,
                    index,
                    Some(PWSTR::from_raw(buffer.as_mut_ptr())),
                    &raw mut len,
                    None,
                    None,
                    None,
                    None,
                )
            };

            if result == ERROR_NO_MORE_ITEMS {
                break;
            }
            if result != ERROR_SUCCESS {
                return Err(windows::core::Error::from(result).into());
            }

            names.push(String::from_utf16_lossy(&buffer[..len as usize]));
        }

        Ok(names)
    }

    /// Reads a value's type and raw bytes; `None` when the value is absent.
    fn raw_value(&self, name: &str) -> Result<Option<(REG_VALUE_TYPE, Vec<u8>)>, ProviderError> {
        let wide = to_wide(name);
        let mut value_type = REG_VALUE_TYPE::default();
        let mut size = 0u32;

        // SAFETY: First call with a null buffer queries the required size.
        let result = unsafe {
            RegQueryValueExW(
                self.0,
                PCWSTR::from_raw(wide.as_ptr()),
                None,
                Some(&raw mut value_type),
                None,
                Some(&raw mut size),
            )
        };

        if result == ERROR_FILE_NOT_FOUND {
            return Ok(None);
        }
        if result != ERROR_SUCCESS {
            return Err(windows::core::Error::from(result).into());
        }

        let mut data = vec![0u8; size as usize];

        // SAFETY: `data` is writable for `size` bytes as reported above.
        let result = unsafe {
            RegQueryValueExW(
                self.0,
                PCWSTR::from_raw(wide.as_ptr()),
                None,
                Some(&raw mut value_type),
                Some(data.as_mut_ptr()),
                Some(&raw mut size),
            )
        };

        if result != ERROR_SUCCESS {
            return Err(windows::core::Error::from(result).into());
        }

        data.truncate(size as usize);
        Ok(Some((value_type, data)))
    }

    /// Reads a `REG_SZ`-style value as a string; `None` when absent or not a string.
    fn string_value(&self, name: &str) -> Result<Option<String>, ProviderError> {
        Ok(self.raw_value(name)?.and_then(|(ty, data)| {
            matches!(ty, REG_SZ | REG_EXPAND_SZ).then(|| decode_sz(&data))
        }))
    }

    /// Reads a `REG_DWORD` value; `None` when absent or not a DWORD.
    fn dword_value(&self, name: &str) -> Result<Option<u32>, ProviderError> {
        Ok(self.raw_value(name)?.and_then(|(ty, data)| {
            (ty == REG_DWORD && data.len() >= 4)
                .then(|| u32::from_le_bytes([data[0], data[1], data[2], data[3]]))
        }))
    }
}

/// Locates the driver registry key whose `NetCfgInstanceId` matches the adapter.
fn driver_key_for(adapter: &AdapterInfo) -> Result<RegKey, ProviderError> {
    let class = RegKey::open(HKEY_LOCAL_MACHINE, NETWORK_CLASS_KEY)?;

    for name in class.subkey_names()? {
        // Some class subkeys (e.g. "Properties") deny read access; skip them.
        let Ok(key) = class.open_subkey(&name) else {
            continue;
        };
        let Ok(Some(instance_id)) = key.string_value("NetCfgInstanceId") else {
            continue;
        };
        if instance_id.eq_ignore_ascii_case(&adapter.id) {
            return Ok(key);
        }
    }

    Err(ProviderError::Platform {
        message: format!("no driver registry key for adapter '{}'", adapter.name),
    })
}

// ============================================================================
// Value decoding
// ============================================================================

/// Decodes UTF-16 string bytes, trimming the trailing nul.
fn decode_sz(data: &[u8]) -> String {
    let units: Vec<u16> = data
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .take_while(|&unit| unit != 0)
        .collect();
    String::from_utf16_lossy(&units)
}

/// Decodes `REG_MULTI_SZ` bytes into the list of non-empty strings.
fn decode_multi_sz(data: &[u8]) -> Vec<String> {
    let units: Vec<u16> = data
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    units
        .split(|&unit| unit == 0)
        .filter(|chunk| !chunk.is_empty())
        .map(String::from_utf16_lossy)
        .collect()
}

/// Converts a raw registry value into the property value union.
fn decode_value(value_type: REG_VALUE_TYPE, data: &[u8]) -> PropertyValue {
    match value_type {
        REG_SZ | REG_EXPAND_SZ => PropertyValue::Text(decode_sz(data)),
        REG_MULTI_SZ => PropertyValue::TextList(decode_multi_sz(data)),
        REG_DWORD if data.len() >= 4 => PropertyValue::Int(i64::from(u32::from_le_bytes([
            data[0], data[1], data[2], data[3],
        ]))),
        REG_QWORD if data.len() >= 8 => {
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(&data[..8]);
            PropertyValue::Int(i64::from_le_bytes(bytes))
        }
        other => PropertyValue::Opaque {
            rendered: data
                .iter()
                .map(|byte| format!("{byte:02x}"))
                .collect::<Vec<_>>()
                .join(" "),
            type_name: registry_type_name(other),
        },
    }
}

/// Human-readable name for a registry value type.
fn registry_type_name(value_type: REG_VALUE_TYPE) -> String {
    if value_type == REG_BINARY {
        "REG_BINARY".to_string()
    } else {
        format!("REG_TYPE_{}", value_type.0)
    }
}

// ============================================================================
// Property providers
// ============================================================================

/// Windows implementation of [`PowerManagementProvider`].
///
/// Reads the driver key's `PnPCapabilities` DWORD: bit `0x10` set means the
/// device may not be powered off. An absent value means driver defaults
/// apply, which permit power-off.
#[derive(Debug, Clone, Default)]
pub struct WindowsPowerManagement {
    _private: (),
}

impl WindowsPowerManagement {
    /// Creates a new Windows power-management provider.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl PowerManagementProvider for WindowsPowerManagement {
    fn get(&self, adapter: &AdapterInfo) -> Result<PowerManagement, ProviderError> {
        let driver = driver_key_for(adapter)?;
        let capabilities = driver.dword_value("PnPCapabilities")?.unwrap_or(0);

        Ok(PowerManagement {
            allow_power_off: capabilities & PNP_DISABLE_POWER_OFF == 0,
        })
    }
}

/// Windows implementation of [`AdvancedPropertyProvider`].
///
/// Walks the driver key's `Ndi\params` subkeys: each subkey is one advanced
/// property whose `ParamDesc` value is the display name and whose current
/// value lives in the driver key under the keyword name (falling back to the
/// param's registered `Default`).
#[derive(Debug, Clone, Default)]
pub struct WindowsAdvancedProperties {
    _private: (),
}

impl WindowsAdvancedProperties {
    /// Creates a new Windows advanced-property provider.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl AdvancedPropertyProvider for WindowsAdvancedProperties {
    fn list(&self, adapter: &AdapterInfo) -> Result<Vec<AdapterProperty>, ProviderError> {
        let driver = driver_key_for(adapter)?;

        // A driver that registers no tunables simply has no params key.
        let Ok(params) = driver.open_subkey(r"Ndi\params") else {
            return Ok(Vec::new());
        };

        let mut properties = Vec::new();
        for keyword in params.subkey_names()? {
            let Ok(param) = params.open_subkey(&keyword) else {
                continue;
            };
            let Ok(Some(display_name)) = param.string_value("ParamDesc") else {
                continue;
            };

            let current = driver.raw_value(&keyword)?;
            let value = match current {
                Some((ty, data)) => decode_value(ty, &data),
                None => match param.raw_value("Default")? {
                    Some((ty, data)) => decode_value(ty, &data),
                    None => continue,
                },
            };

            properties.push(AdapterProperty::new(display_name, value));
        }

        Ok(properties)
    }
}
